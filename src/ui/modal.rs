use egui::containers::modal::Modal;
use egui::{Align, Context, Frame, Id, Layout, RichText, Ui};

pub struct ModalFrame;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ModalAction {
    None,
    Close,
    Apply,
}

/// 设置、关于等窗口共用的外框：标题栏 + 关闭按钮
impl ModalFrame {
    pub fn show(
        ctx: &Context,
        open: &mut bool,
        title: &str,
        add_contents: impl FnOnce(&mut Ui) -> ModalAction,
    ) -> ModalAction {
        if !*open {
            return ModalAction::None;
        }

        let mut action = ModalAction::None;
        Modal::new(Id::new(title)).show(ctx, |ui| {
            Frame::window(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(title).strong());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(RichText::new("✖")).clicked() {
                            *open = false;
                        }
                    });
                });

                ui.separator();

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    *open = false;
                }

                action = add_contents(ui);
                if action == ModalAction::Close {
                    *open = false;
                }
            });
        });
        action
    }
}
