use egui::{CentralPanel, Color32, Context, Image, Rect, RichText, Spinner, Ui, pos2, vec2};
use crate::core::pair_textures::{PairTextures, TextureSlot};
use crate::core::session::PairRecord;
use crate::i18n::TextBundle;
use crate::ui::verdict::draw_verdict_badge;
use crate::utils::image::{base_name, fit_size};

const NAME_ROW_HEIGHT: f32 = 28.0;

/// 主画布：标注结果 + 左右两张图
pub fn draw_pair_view(ctx: &Context, record: &PairRecord, textures: &mut PairTextures, text: &TextBundle) {
    let background_frame = egui::Frame::NONE
        .fill(Color32::from_rgb(25, 25, 25))
        .inner_margin(8.0);

    CentralPanel::default().frame(background_frame).show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            draw_verdict_badge(ui, record.state, text);
        });
        ui.add_space(6.0);

        ui.columns(2, |columns| {
            draw_image_panel(&mut columns[0], &record.path_a, textures, text);
            draw_image_panel(&mut columns[1], &record.path_b, textures, text);
        });

        // 后台还有图在解码（包括预加载的下一组）
        if textures.is_busy() {
            let rect = ui.max_rect();
            let spinner_rect = Rect::from_min_size(pos2(rect.right() - 28.0, rect.top() + 4.0), vec2(24.0, 24.0));
            ui.put(spinner_rect, Spinner::new().size(18.0).color(Color32::from_gray(160)));
        }
    });
}

fn draw_image_panel(ui: &mut Ui, path: &str, textures: &mut PairTextures, text: &TextBundle) {
    let available = ui.available_size();
    let area = vec2(available.x, (available.y - NAME_ROW_HEIGHT).max(0.0));

    ui.vertical_centered(|ui| {
        ui.allocate_ui(area, |ui| {
            ui.set_min_size(area);
            ui.centered_and_justified(|ui| match textures.slot(std::path::Path::new(path)) {
                TextureSlot::Ready(tex) => {
                    let size = fit_size(tex.size_vec2(), area);
                    ui.add(Image::from_texture(&tex).fit_to_exact_size(size));
                }
                TextureSlot::Loading => {
                    ui.add(Spinner::new().size(32.0).color(Color32::from_gray(150)));
                }
                TextureSlot::Failed => {
                    ui.label(RichText::new(text.viewer_error).color(Color32::RED).size(14.0));
                }
            });
        });

        ui.label(RichText::new(base_name(path)).color(Color32::from_gray(220)).size(15.0))
            .on_hover_text(path);
    });
}
