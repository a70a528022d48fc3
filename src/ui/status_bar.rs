use egui::{Button, Context, Id, Layout, Align, RichText, Slider, TopBottomPanel, Ui};
use crate::core::action::Action;
use crate::core::session::Session;
use crate::i18n::TextBundle;
use crate::model::annotation::AnnotationState;
use crate::ui::verdict::badge;

/// 底部操作栏：进度条 + 按钮 + 进度文字
pub fn draw_control_bar(ctx: &Context, session: &Session, text: &TextBundle) -> Option<Action> {
    let mut action = None;

    TopBottomPanel::bottom("control_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        if let Some(a) = draw_scrubber(ui, session) {
            action = Some(a);
        }
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button(text.btn_prev).clicked() {
                action = Some(Action::Prev);
            }
            if ui.button(text.btn_next).clicked() {
                action = Some(Action::Next);
            }
            if ui.button(text.btn_swap).clicked() {
                action = Some(Action::Swap);
            }

            ui.separator();

            for (state, label) in [
                (AnnotationState::Yes, text.btn_yes),
                (AnnotationState::No, text.btn_no),
                (AnnotationState::Unsure, text.btn_unsure),
            ] {
                let button = Button::new(RichText::new(label).strong()).fill(badge(state).color.gamma_multiply(0.6));
                if ui.add(button).clicked() {
                    action = Some(Action::Mark(state));
                }
            }

            ui.separator();

            if ui.button(text.btn_save).clicked() {
                action = Some(Action::Save);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add_space(10.0);
                let (pos, total) = session.progress();
                ui.label(format!("{} / {}", pos, total));
                ui.separator();
                ui.label(
                    RichText::new(format!("{} {} / {}", text.status_annotated, session.annotated_count(), total)).weak(),
                );
            });
        });
        ui.add_space(4.0);
    });

    action
}

/// 拖动过程中只记住位置，松手后才跳转
fn draw_scrubber(ui: &mut Ui, session: &Session) -> Option<Action> {
    let id = Id::new("scrub_pos");
    let (current, total) = session.progress();
    let mut pos = ui.data(|d| d.get_temp::<usize>(id)).unwrap_or(current - 1);

    ui.spacing_mut().slider_width = ui.available_width() - 16.0;
    let response = ui.add(Slider::new(&mut pos, 0..=total - 1).show_value(false));

    if response.dragged() {
        ui.data_mut(|d| d.insert_temp(id, pos));
        None
    } else if response.drag_stopped() || response.changed() {
        ui.data_mut(|d| d.remove::<usize>(id));
        Some(Action::ScrubTo(pos))
    } else {
        None
    }
}
