use egui::{Context, MenuBar, TopBottomPanel};
use crate::core::action::Action;
use crate::i18n::TextBundle;
use crate::model::state::UiMode;

pub fn draw_menu(
    ctx: &Context,
    ui_mode: &mut UiMode,
    text: &TextBundle,
    has_session: bool,
) -> Option<Action> {
    let mut action = None;

    TopBottomPanel::top("menu").show(ctx, |ui| {
        MenuBar::new().ui(ui, |ui| {
            ui.menu_button(text.menu_file, |ui| {
                ui.set_min_width(180.0);

                if ui.button(text.menu_open_list).clicked() {
                    action = Some(Action::OpenList);
                    ui.close()
                }
                if ui.button(text.menu_open_annotations).clicked() {
                    action = Some(Action::OpenAnnotations);
                    ui.close()
                }
                if ui.add_enabled(has_session, egui::Button::new(text.menu_save)).clicked() {
                    action = Some(Action::Save);
                    ui.close()
                }

                ui.separator();

                if ui.button(text.menu_settings).clicked() {
                    *ui_mode = UiMode::Settings;
                    ui.close()
                }
            });

            if ui.button(text.menu_about).clicked() {
                *ui_mode = UiMode::About;
            }
        });
    });

    action
}
