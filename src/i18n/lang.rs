use serde::{Deserialize, Serialize};
use crate::core::error::AnnotateError;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Language {
    Zh,
    En,
    Ja,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Zh, Language::En, Language::Ja];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
            Language::Ja => "日本語",
        }
    }

    /// 需要额外加载 CJK 字体
    pub fn needs_cjk_font(&self) -> bool {
        !matches!(self, Language::En)
    }
}

pub struct TextBundle {
    // Menu
    pub menu_file: &'static str,
    pub menu_open_list: &'static str,
    pub menu_open_annotations: &'static str,
    pub menu_save: &'static str,
    pub menu_settings: &'static str,
    pub menu_about: &'static str,

    // 操作按钮
    pub btn_yes: &'static str,
    pub btn_no: &'static str,
    pub btn_unsure: &'static str,
    pub btn_prev: &'static str,
    pub btn_next: &'static str,
    pub btn_swap: &'static str,
    pub btn_save: &'static str,

    // 标注状态
    pub state_unknown: &'static str,
    pub state_yes: &'static str,
    pub state_no: &'static str,
    pub state_unsure: &'static str,

    // 打开列表
    pub open_title: &'static str,
    pub open_exit_question: &'static str,
    pub open_uneven: &'static str,
    pub open_empty: &'static str,
    pub open_unreadable: &'static str,
    pub open_malformed: &'static str,
    pub dialog_ok: &'static str,
    pub dialog_cancel: &'static str,

    // 保存
    pub save_title: &'static str,
    pub save_no_name: &'static str,
    pub save_success: &'static str,
    pub save_failed: &'static str,

    // 越界提示
    pub finished_title: &'static str,
    pub finished_message: &'static str,
    pub before_start_title: &'static str,
    pub before_start_message: &'static str,

    // Settings
    pub settings_title: &'static str,
    pub settings_language: &'static str,
    pub settings_state_format: &'static str,
    pub settings_format_tag: &'static str,
    pub settings_format_ordinal: &'static str,
    pub settings_close: &'static str,
    pub settings_apply: &'static str,

    // About
    pub about_title: &'static str,
    pub about_desc: &'static str,
    pub about_shortcuts: &'static str,
    pub about_close: &'static str,

    // Viewer
    pub viewer_error: &'static str,
    pub status_annotated: &'static str,
}

pub const ZH_TEXT: TextBundle = TextBundle {
    menu_file: "文件",
    menu_open_list: "打开图片对列表…",
    menu_open_annotations: "打开标注结果…",
    menu_save: "保存标注…",
    menu_settings: "设置",
    menu_about: "关于",

    btn_yes: "匹配",
    btn_no: "不匹配",
    btn_unsure: "不确定",
    btn_prev: "上一组",
    btn_next: "下一组",
    btn_swap: "交换",
    btn_save: "保存",

    state_unknown: "未标注",
    state_yes: "匹配",
    state_no: "不匹配",
    state_unsure: "不确定",

    open_title: "选择要标注的文件",
    open_exit_question: "现在不想干活了？",
    open_uneven: "图片列表不是偶数个",
    open_empty: "图片列表为空",
    open_unreadable: "无法读取该文件",
    open_malformed: "标注文件格式错误",
    dialog_ok: "确定",
    dialog_cancel: "取消",

    save_title: "选择保存位置",
    save_no_name: "请输入合法的文件名",
    save_success: "保存成功",
    save_failed: "保存失败",

    finished_title: "标注完成",
    finished_message: "恭喜！所有图片都标完了，记得保存 :)",
    before_start_title: "标注提醒",
    before_start_message: "已经是第一组了 :)",

    settings_title: "设置",
    settings_language: "语言",
    settings_state_format: "保存格式",
    settings_format_tag: "名称 (Yes / No)",
    settings_format_ordinal: "序号 (0-3)",
    settings_close: "关闭",
    settings_apply: "应用",

    about_title: "关于项目",
    about_desc: "图片对标注工具",
    about_shortcuts: "快捷键：Y/1 匹配  N/2 不匹配  U/3 不确定  ←/→ 翻页  S 交换  Ctrl+S 保存",
    about_close: "我知道了",

    viewer_error: "文件损坏或格式不支持",
    status_annotated: "已标注",
};

pub const EN_TEXT: TextBundle = TextBundle {
    menu_file: "File",
    menu_open_list: "Open Pair List...",
    menu_open_annotations: "Open Annotations...",
    menu_save: "Save Annotations...",
    menu_settings: "Settings",
    menu_about: "About",

    btn_yes: "Match",
    btn_no: "No Match",
    btn_unsure: "Unsure",
    btn_prev: "Prev",
    btn_next: "Next",
    btn_swap: "Swap",
    btn_save: "Save",

    state_unknown: "Unknown",
    state_yes: "Match",
    state_no: "No Match",
    state_unsure: "Unsure",

    open_title: "Choose a file to annotate",
    open_exit_question: "Don't want to work now?",
    open_uneven: "This image list is not even",
    open_empty: "This image list is empty",
    open_unreadable: "Cannot read this file",
    open_malformed: "This annotation file is malformed",
    dialog_ok: "OK",
    dialog_cancel: "Cancel",

    save_title: "Choose a file to save",
    save_no_name: "Please enter a legal file name",
    save_success: "Save result success",
    save_failed: "Save failed",

    finished_title: "Annotation over",
    finished_message: "Congratulations! You've finished all the job! Please save your work :)",
    before_start_title: "Annotation warning",
    before_start_message: "You must start at 0 :)",

    settings_title: "Settings",
    settings_language: "Language",
    settings_state_format: "Save format",
    settings_format_tag: "Name (Yes / No)",
    settings_format_ordinal: "Ordinal (0-3)",
    settings_close: "Close",
    settings_apply: "Apply",

    about_title: "About",
    about_desc: "Image pair annotation tool",
    about_shortcuts: "Shortcuts: Y/1 match  N/2 no match  U/3 unsure  ←/→ move  S swap  Ctrl+S save",
    about_close: "Close",

    viewer_error: "File damaged or format not supported",
    status_annotated: "annotated",
};

pub const JA_TEXT: TextBundle = TextBundle {
    menu_file: "ファイル",
    menu_open_list: "ペアリストを開く...",
    menu_open_annotations: "アノテーションを開く...",
    menu_save: "アノテーションを保存...",
    menu_settings: "設定",
    menu_about: "について",

    btn_yes: "一致",
    btn_no: "不一致",
    btn_unsure: "不明",
    btn_prev: "前へ",
    btn_next: "次へ",
    btn_swap: "入れ替え",
    btn_save: "保存",

    state_unknown: "未判定",
    state_yes: "一致",
    state_no: "不一致",
    state_unsure: "不明",

    open_title: "アノテーションするファイルを選択",
    open_exit_question: "今は作業しませんか？",
    open_uneven: "画像リストが偶数ではありません",
    open_empty: "画像リストが空です",
    open_unreadable: "ファイルを読み込めません",
    open_malformed: "アノテーションファイルの形式が不正です",
    dialog_ok: "OK",
    dialog_cancel: "キャンセル",

    save_title: "保存先を選択",
    save_no_name: "正しいファイル名を入力してください",
    save_success: "保存しました",
    save_failed: "保存に失敗しました",

    finished_title: "アノテーション完了",
    finished_message: "おめでとうございます！すべて完了しました。保存してください :)",
    before_start_title: "アノテーション警告",
    before_start_message: "最初のペアです :)",

    settings_title: "設定",
    settings_language: "言語",
    settings_state_format: "保存形式",
    settings_format_tag: "名前 (Yes / No)",
    settings_format_ordinal: "番号 (0-3)",
    settings_close: "閉じる",
    settings_apply: "適用",

    about_title: "プロジェクトについて",
    about_desc: "画像ペアアノテーションツール",
    about_shortcuts: "ショートカット：Y/1 一致  N/2 不一致  U/3 不明  ←/→ 移動  S 入れ替え  Ctrl+S 保存",
    about_close: "閉じる",

    viewer_error: "ファイルが破損しているか、形式がサポートされていません",
    status_annotated: "判定済み",
};

pub fn get_text(lang: Language) -> &'static TextBundle {
    match lang {
        Language::Zh => &ZH_TEXT,
        Language::En => &EN_TEXT,
        Language::Ja => &JA_TEXT,
    }
}

impl TextBundle {
    /// 打开列表失败时给用户看的说明
    pub fn describe_error(&self, err: &AnnotateError) -> String {
        match err {
            AnnotateError::UnevenList { .. } => self.open_uneven.to_string(),
            AnnotateError::EmptyList => self.open_empty.to_string(),
            AnnotateError::NoFileSelected => self.open_exit_question.to_string(),
            AnnotateError::Read { path, .. } => format!("{}: {}", self.open_unreadable, path.display()),
            AnnotateError::Write { .. } => format!("{}: {}", self.save_failed, err),
            AnnotateError::MalformedRecord { .. } | AnnotateError::UnknownState { .. } => {
                format!("{} ({})", self.open_malformed, err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_errors_use_plain_messages() {
        let en = get_text(Language::En);
        assert_eq!(
            en.describe_error(&AnnotateError::UnevenList { left: 2, right: 1 }),
            "This image list is not even"
        );
        assert_eq!(en.describe_error(&AnnotateError::EmptyList), "This image list is empty");
        assert_eq!(
            get_text(Language::Zh).describe_error(&AnnotateError::EmptyList),
            "图片列表为空"
        );
    }

    #[test]
    fn cancelled_open_dialog_asks_about_exit() {
        let en = get_text(Language::En);
        assert_eq!(en.describe_error(&AnnotateError::NoFileSelected), "Don't want to work now?");
        assert_ne!(en.describe_error(&AnnotateError::NoFileSelected), en.save_no_name);
    }

    #[test]
    fn malformed_lines_mention_line_number() {
        let msg = get_text(Language::En).describe_error(&AnnotateError::MalformedRecord { line: 4, tokens: 2 });
        assert!(msg.starts_with("This annotation file is malformed"));
        assert!(msg.contains("line 4"));
    }
}
