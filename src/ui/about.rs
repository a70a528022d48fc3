use egui::Context;
use crate::i18n::TextBundle;
use crate::ui::modal::{ModalAction, ModalFrame};

pub fn render_about_window(ctx: &Context, open: &mut bool, text: &TextBundle) {
    ModalFrame::show(ctx, open, text.about_title, |ui| {
        let mut action = ModalAction::None;

        ui.vertical_centered(|ui| {
            ui.heading("PairAnnotator");
            ui.label(format!("{} v{}", text.about_desc, env!("CARGO_PKG_VERSION")));
            ui.add_space(8.0);
            ui.label(egui::RichText::new(text.about_shortcuts).weak());
            ui.add_space(12.0);

            if ui.button(text.about_close).clicked() {
                action = ModalAction::Close;
            }
        });

        action
    });
}
