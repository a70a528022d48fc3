use egui::{Align2, Color32, FontId, Response, RichText, Sense, Ui, vec2};
use crate::i18n::TextBundle;
use crate::model::annotation::AnnotationState;

pub struct Badge {
    pub glyph: &'static str,
    pub color: Color32,
}

/// 按序号排列：Unknown, Yes, No, Unsure
const BADGES: [Badge; 4] = [
    Badge { glyph: "?", color: Color32::from_rgb(110, 110, 110) },
    Badge { glyph: "✔", color: Color32::from_rgb(60, 170, 90) },
    Badge { glyph: "✖", color: Color32::from_rgb(210, 70, 70) },
    Badge { glyph: "~", color: Color32::from_rgb(220, 160, 40) },
];

pub fn badge(state: AnnotationState) -> &'static Badge {
    &BADGES[state.ordinal() as usize]
}

pub fn state_label(state: AnnotationState, text: &TextBundle) -> &'static str {
    let labels = [text.state_unknown, text.state_yes, text.state_no, text.state_unsure];
    labels[state.ordinal() as usize]
}

/// 圆形徽章 + 文字，显示当前这组的标注结果
pub fn draw_verdict_badge(ui: &mut Ui, state: AnnotationState, text: &TextBundle) -> Response {
    let badge = badge(state);
    ui.horizontal(|ui| {
        let (rect, response) = ui.allocate_exact_size(vec2(36.0, 36.0), Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), 17.0, badge.color);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            badge.glyph,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
        ui.label(RichText::new(state_label(state, text)).color(badge.color).size(18.0).strong());
        response
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{get_text, Language};

    #[test]
    fn every_state_has_its_own_badge() {
        let glyphs: Vec<_> = AnnotationState::ALL.iter().map(|s| badge(*s).glyph).collect();
        assert_eq!(glyphs, ["?", "✔", "✖", "~"]);
    }

    #[test]
    fn labels_follow_language() {
        let en = get_text(Language::En);
        assert_eq!(state_label(AnnotationState::No, en), "No Match");
        assert_eq!(state_label(AnnotationState::Unknown, get_text(Language::Zh)), "未标注");
    }
}
