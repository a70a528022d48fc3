use crate::core::error::AnnotateError;
use crate::core::session::Clamp;
use crate::i18n::TextBundle;
use crate::ui::toast::{ToastManager, ToastSystem};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UiMode {
    Normal,
    Settings,
    About,
}

/// 需要用户确认的提示框
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Prompt {
    /// 取消了打开对话框，问一下是不是要退出
    ConfirmExit,
    /// 列表不合法，确认后重新选
    LoadFailed(String),
    /// 已经标完最后一组
    Finished,
    BeforeStart,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PromptOutcome {
    Ok,
    Cancel,
}

/// 提示框关闭后要做的事
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FollowUp {
    Nothing,
    PickAgain,
    Exit,
}

pub struct ViewState {
    pub ui_mode: UiMode,
    pub prompt: Option<Prompt>,
    /// 下一帧弹出打开对话框（启动时的循环选择）
    pub pick_requested: bool,

    pub toast_system: ToastSystem,
    pub toast_manager: ToastManager,
}

impl ViewState {
    pub fn new() -> Self {
        let toast_system = ToastSystem::new();
        let toast_manager = toast_system.manager();
        Self {
            ui_mode: UiMode::Normal,
            prompt: None,
            pick_requested: true,
            toast_system,
            toast_manager,
        }
    }

    /// 是否在等用户处理弹窗，期间不响应快捷键
    pub fn is_blocked(&self) -> bool {
        self.prompt.is_some() || self.ui_mode != UiMode::Normal
    }

    /// 启动时打开列表失败：取消 → 确认退出，其它 → 提示后重选
    pub fn startup_failed(&mut self, err: &AnnotateError, text: &TextBundle) {
        self.prompt = Some(match err {
            AnnotateError::NoFileSelected => Prompt::ConfirmExit,
            other => Prompt::LoadFailed(text.describe_error(other)),
        });
    }

    /// 读取当前记录时游标被拉回，给出对应提示
    pub fn cursor_clamped(&mut self, clamp: Clamp) {
        match clamp {
            Clamp::InRange => {}
            Clamp::PastEnd => self.prompt = Some(Prompt::Finished),
            Clamp::BeforeStart => self.prompt = Some(Prompt::BeforeStart),
        }
    }

    pub fn resolve_prompt(&mut self, outcome: PromptOutcome, has_session: bool) -> FollowUp {
        let Some(prompt) = self.prompt.take() else {
            return FollowUp::Nothing;
        };
        let follow_up = match (prompt, outcome) {
            (Prompt::ConfirmExit, PromptOutcome::Ok) => FollowUp::Exit,
            (Prompt::ConfirmExit, PromptOutcome::Cancel) => FollowUp::PickAgain,
            (Prompt::LoadFailed(_), _) if !has_session => FollowUp::PickAgain,
            _ => FollowUp::Nothing,
        };
        if follow_up == FollowUp::PickAgain {
            self.pick_requested = true;
        }
        follow_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{get_text, Language};

    fn en() -> &'static TextBundle {
        get_text(Language::En)
    }

    #[test]
    fn cancelled_dialog_asks_before_exit() {
        let mut state = ViewState::new();
        state.pick_requested = false;
        state.startup_failed(&AnnotateError::NoFileSelected, en());
        assert_eq!(state.prompt, Some(Prompt::ConfirmExit));
        assert!(state.is_blocked());

        assert_eq!(state.resolve_prompt(PromptOutcome::Cancel, false), FollowUp::PickAgain);
        assert!(state.pick_requested);
        assert_eq!(state.prompt, None);
    }

    #[test]
    fn confirming_exit_exits() {
        let mut state = ViewState::new();
        state.startup_failed(&AnnotateError::NoFileSelected, en());
        assert_eq!(state.resolve_prompt(PromptOutcome::Ok, false), FollowUp::Exit);
    }

    #[test]
    fn bad_list_reprompts_until_a_session_exists() {
        let mut state = ViewState::new();
        state.pick_requested = false;
        state.startup_failed(&AnnotateError::EmptyList, en());
        assert_eq!(state.prompt, Some(Prompt::LoadFailed("This image list is empty".into())));
        assert_eq!(state.resolve_prompt(PromptOutcome::Ok, false), FollowUp::PickAgain);

        state.pick_requested = false;
        state.startup_failed(&AnnotateError::UnevenList { left: 1, right: 0 }, en());
        assert_eq!(state.resolve_prompt(PromptOutcome::Ok, true), FollowUp::Nothing);
        assert!(!state.pick_requested);
    }

    #[test]
    fn clamping_raises_notices() {
        let mut state = ViewState::new();
        state.cursor_clamped(Clamp::InRange);
        assert_eq!(state.prompt, None);
        state.cursor_clamped(Clamp::PastEnd);
        assert_eq!(state.prompt, Some(Prompt::Finished));
        assert_eq!(state.resolve_prompt(PromptOutcome::Ok, true), FollowUp::Nothing);
        state.cursor_clamped(Clamp::BeforeStart);
        assert_eq!(state.prompt, Some(Prompt::BeforeStart));
    }
}
