use egui::containers::modal::Modal;
use egui::{Align, Context, Id, Layout, RichText};
use crate::i18n::TextBundle;
use crate::model::state::{Prompt, PromptOutcome};

/// 渲染当前的提示框，用户点了按钮（或 Esc / 点击外部）时返回结果
pub fn draw_prompt(ctx: &Context, prompt: &Prompt, text: &TextBundle) -> Option<PromptOutcome> {
    let (title, message, cancellable) = match prompt {
        Prompt::ConfirmExit => (text.open_title, text.open_exit_question.to_string(), true),
        Prompt::LoadFailed(message) => (text.open_title, message.clone(), false),
        Prompt::Finished => (text.finished_title, text.finished_message.to_string(), false),
        Prompt::BeforeStart => (text.before_start_title, text.before_start_message.to_string(), false),
    };

    let mut outcome = None;
    let response = Modal::new(Id::new("prompt")).show(ctx, |ui| {
        ui.set_min_width(320.0);
        ui.label(RichText::new(title).strong().size(16.0));
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(12.0);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if cancellable && ui.button(text.dialog_cancel).clicked() {
                outcome = Some(PromptOutcome::Cancel);
            }
            if ui.button(text.dialog_ok).clicked() {
                outcome = Some(PromptOutcome::Ok);
            }
        });
    });

    if outcome.is_none() && response.should_close() {
        outcome = Some(if cancellable { PromptOutcome::Cancel } else { PromptOutcome::Ok });
    }
    outcome
}
