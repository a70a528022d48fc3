use egui::{Key, Modifiers};
use crate::model::annotation::AnnotationState;

/// 用户在界面上触发的动作，每一个对应会话上的一次操作
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Save,
    Mark(AnnotationState),
    Next,
    Prev,
    Swap,
    ScrubTo(usize),
    OpenList,
    OpenAnnotations,
}

/// 键盘快捷键
pub fn action_for_key(key: Key, modifiers: Modifiers) -> Option<Action> {
    if modifiers.command {
        return match key {
            Key::S => Some(Action::Save),
            Key::O => Some(Action::OpenList),
            _ => None,
        };
    }
    match key {
        Key::Y | Key::Num1 => Some(Action::Mark(AnnotationState::Yes)),
        Key::N | Key::Num2 => Some(Action::Mark(AnnotationState::No)),
        Key::U | Key::Num3 => Some(Action::Mark(AnnotationState::Unsure)),
        Key::ArrowRight | Key::Space => Some(Action::Next),
        Key::ArrowLeft => Some(Action::Prev),
        Key::S => Some(Action::Swap),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_mark_and_move() {
        let none = Modifiers::NONE;
        assert_eq!(action_for_key(Key::Y, none), Some(Action::Mark(AnnotationState::Yes)));
        assert_eq!(action_for_key(Key::Num3, none), Some(Action::Mark(AnnotationState::Unsure)));
        assert_eq!(action_for_key(Key::ArrowLeft, none), Some(Action::Prev));
        assert_eq!(action_for_key(Key::S, none), Some(Action::Swap));
        assert_eq!(action_for_key(Key::Q, none), None);
    }

    #[test]
    fn command_s_saves_instead_of_swapping() {
        assert_eq!(action_for_key(Key::S, Modifiers::COMMAND), Some(Action::Save));
        assert_eq!(action_for_key(Key::Y, Modifiers::COMMAND), None);
    }
}
