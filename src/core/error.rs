use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnnotateError>;

#[derive(Debug, Error)]
pub enum AnnotateError {
    /// 奇数个路径，左右两列对不齐
    #[error("image list is not even: {left} left paths, {right} right paths")]
    UnevenList { left: usize, right: usize },

    #[error("image list is empty")]
    EmptyList,

    #[error("no file selected")]
    NoFileSelected,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 标注文件中某一行不是三列
    #[error("line {line}: expected 3 columns, found {tokens}")]
    MalformedRecord { line: usize, tokens: usize },

    #[error("line {line}: unknown annotation state `{value}`")]
    UnknownState { line: usize, value: String },
}
