use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 单组图片的标注结果
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum AnnotationState {
    #[default]
    Unknown, // 未标注
    Yes,     // 匹配
    No,      // 不匹配
    Unsure,  // 不确定
}

impl AnnotationState {
    pub const ALL: [AnnotationState; 4] = [
        AnnotationState::Unknown,
        AnnotationState::Yes,
        AnnotationState::No,
        AnnotationState::Unsure,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            AnnotationState::Unknown => 0,
            AnnotationState::Yes => 1,
            AnnotationState::No => 2,
            AnnotationState::Unsure => 3,
        }
    }

    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    pub fn tag(self) -> &'static str {
        match self {
            AnnotationState::Unknown => "Unknown",
            AnnotationState::Yes => "Yes",
            AnnotationState::No => "No",
            AnnotationState::Unsure => "Unsure",
        }
    }

    pub fn is_annotated(self) -> bool {
        self != AnnotationState::Unknown
    }
}

impl fmt::Display for AnnotationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 同时接受序号 (0-3) 和名字，名字不区分大小写
impl FromStr for AnnotationState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<u8>() {
            return Self::from_ordinal(n).ok_or(());
        }
        Self::ALL
            .into_iter()
            .find(|state| state.tag().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// 保存文件时第三列的写法
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum StateFormat {
    #[default]
    Tag,
    Ordinal,
}

impl StateFormat {
    pub fn render(self, state: AnnotationState) -> String {
        match self {
            StateFormat::Tag => state.tag().to_string(),
            StateFormat::Ordinal => state.ordinal().to_string(),
        }
    }
}
