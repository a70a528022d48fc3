use egui::{Align, ComboBox, Context, Layout, Ui};
use crate::i18n::{get_text, Language, TextBundle};
use crate::model::annotation::StateFormat;
use crate::model::config::Config;
use crate::ui::modal::{ModalAction, ModalFrame};

/// 设置窗口，编辑的是 draft，点“应用”后由调用方写回
pub fn render_settings_window(
    ctx: &Context,
    open: &mut bool,
    render_lang: Language,
    draft: &mut Config,
) -> ModalAction {
    let text = get_text(render_lang);

    ModalFrame::show(ctx, open, text.settings_title, |ui| {
        ui.set_min_width(360.0);
        let mut action = ModalAction::None;

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                ui.label(format!("{}:", text.settings_language));
                ComboBox::from_id_salt("lang_selector")
                    .selected_text(draft.language.as_str())
                    .show_ui(ui, |ui| {
                        for lang in Language::ALL {
                            ui.selectable_value(&mut draft.language, lang, lang.as_str());
                        }
                    });
                ui.end_row();

                ui.label(format!("{}:", text.settings_state_format));
                ui.vertical(|ui| {
                    ui.radio_value(&mut draft.state_format, StateFormat::Tag, text.settings_format_tag);
                    ui.radio_value(&mut draft.state_format, StateFormat::Ordinal, text.settings_format_ordinal);
                });
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.separator();
        render_footer(ui, &mut action, text);
        action
    })
}

fn render_footer(ui: &mut Ui, action: &mut ModalAction, text: &TextBundle) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        if ui.button(text.settings_close).clicked() {
            *action = ModalAction::Close;
        }
        if ui.button(text.settings_apply).clicked() {
            *action = ModalAction::Apply;
        }
    });
}
