use egui::{Color32, Context, Id, RichText, Align2};
use std::sync::mpsc::{Receiver, Sender, channel};

/// 通知气泡：保存成功、保存失败等
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

struct Toast {
    message: String,
    level: ToastLevel,
    duration: f32,
    start_time: Option<f64>, // 第一次渲染时才记录
}

const TOAST_WIDTH: f32 = 260.0;
const FADE_IN: f32 = 0.2;
const FADE_OUT: f32 = 0.4;

pub struct ToastSystem {
    current: Option<Toast>,
    receiver: Receiver<Toast>,
    sender: Sender<Toast>,
}

impl ToastSystem {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            current: None,
            receiver,
            sender,
        }
    }

    pub fn manager(&self) -> ToastManager {
        ToastManager {
            sender: self.sender.clone(),
        }
    }

    pub fn update(&mut self, ctx: &Context) {
        // 新消息直接替换旧的
        while let Ok(toast) = self.receiver.try_recv() {
            self.current = Some(toast);
        }

        let Some(toast) = &mut self.current else {
            return;
        };
        let now = ctx.input(|i| i.time);
        let start = *toast.start_time.get_or_insert(now);
        let elapsed = (now - start) as f32;
        let Some(alpha) = fade_alpha(elapsed, toast.duration) else {
            self.current = None;
            return;
        };

        let (bg_color, icon, icon_color) = match toast.level {
            ToastLevel::Info => (Color32::from_rgb(45, 45, 50), "ℹ", Color32::from_rgb(100, 150, 255)),
            ToastLevel::Success => (Color32::from_rgb(40, 50, 40), "✔", Color32::from_rgb(100, 255, 150)),
            ToastLevel::Error => (Color32::from_rgb(50, 40, 40), "✖", Color32::from_rgb(255, 100, 100)),
        };

        egui::Area::new(Id::new("global_toast"))
            .anchor(Align2::CENTER_TOP, [0.0, 60.0])
            .pivot(Align2::CENTER_TOP)
            .interactable(false)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(bg_color.gamma_multiply(alpha))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(15, 8))
                    .show(ui, |ui| {
                        ui.set_max_width(TOAST_WIDTH);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).color(icon_color.gamma_multiply(alpha)).size(18.0).strong());
                            ui.add_space(8.0);
                            ui.label(
                                RichText::new(&toast.message)
                                    .color(Color32::WHITE.gamma_multiply(alpha))
                                    .size(14.0),
                            );
                        });
                    });
            });
        ctx.request_repaint();
    }
}

/// 淡入淡出的透明度，显示时间到了返回 None
fn fade_alpha(elapsed: f32, duration: f32) -> Option<f32> {
    let remaining = duration - elapsed;
    if remaining <= 0.0 {
        return None;
    }
    let alpha = if elapsed < FADE_IN {
        elapsed / FADE_IN
    } else if remaining < FADE_OUT {
        remaining / FADE_OUT
    } else {
        1.0
    };
    Some(alpha.clamp(0.0, 1.0))
}

#[derive(Clone)]
pub struct ToastManager {
    sender: Sender<Toast>,
}

impl ToastManager {
    pub fn show(&self, message: impl Into<String>, level: ToastLevel, duration: f32) {
        let _ = self.sender.send(Toast {
            message: message.into(),
            level,
            duration,
            start_time: None,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastLevel::Success, 3.0);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastLevel::Error, 4.0);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastLevel::Info, 2.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_in_holds_and_fades_out() {
        assert_eq!(fade_alpha(0.0, 3.0), Some(0.0));
        assert_eq!(fade_alpha(0.1, 3.0), Some(0.5));
        assert_eq!(fade_alpha(1.0, 3.0), Some(1.0));
        assert_eq!(fade_alpha(2.8, 3.0).map(|a| (a * 10.0).round()), Some(5.0));
        assert_eq!(fade_alpha(3.0, 3.0), None);
    }

    #[test]
    fn latest_message_wins() {
        let system = ToastSystem::new();
        let manager = system.manager();
        manager.info("first");
        manager.error("second");
        let last = system.receiver.try_iter().last().unwrap();
        assert_eq!(last.message, "second");
        assert_eq!(last.level, ToastLevel::Error);
    }
}
