use egui::Vec2;

/// 按比例缩放到刚好放进 area，小图也会放大
pub fn fit_size(image: Vec2, area: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 || area.x <= 0.0 || area.y <= 0.0 {
        return Vec2::ZERO;
    }
    let ratio = (area.x / image.x).min(area.y / image.y);
    image * ratio
}

/// 列表里的路径一律用 `/` 分隔，取最后一段作为显示名
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn fits_by_the_tighter_side() {
        assert_eq!(fit_size(vec2(400.0, 200.0), vec2(200.0, 200.0)), vec2(200.0, 100.0));
        assert_eq!(fit_size(vec2(100.0, 300.0), vec2(600.0, 600.0)), vec2(200.0, 600.0));
        assert_eq!(fit_size(vec2(0.0, 10.0), vec2(100.0, 100.0)), Vec2::ZERO);
    }

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("data/left/001.png"), "001.png");
        assert_eq!(base_name("plain.jpg"), "plain.jpg");
        assert_eq!(base_name("dir/"), "");
    }
}
