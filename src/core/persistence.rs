use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::{AnnotateError, Result};
use crate::core::session::{PairRecord, Session};
use crate::model::annotation::{AnnotationState, StateFormat};

/// 按空白切分，第 2i 个路径放左列，第 2i+1 个放右列
pub fn parse_pairs(content: &str) -> Result<Session> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (i, token) in content.split_whitespace().enumerate() {
        if i % 2 == 0 {
            left.push(token.to_string());
        } else {
            right.push(token.to_string());
        }
    }
    Session::from_columns(left, right)
}

/// 解析保存过的三列标注文件，空行跳过
pub fn parse_annotated(content: &str) -> Result<Session> {
    let mut records = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let [a, b, state] = tokens[..] else {
            return Err(AnnotateError::MalformedRecord {
                line: i + 1,
                tokens: tokens.len(),
            });
        };
        let state: AnnotationState = state.parse().map_err(|_| AnnotateError::UnknownState {
            line: i + 1,
            value: state.to_string(),
        })?;
        records.push(PairRecord {
            path_a: a.to_string(),
            path_b: b.to_string(),
            state,
        });
    }
    Session::new(records)
}

pub fn write_records<W: Write>(out: &mut W, records: &[PairRecord], format: StateFormat) -> std::io::Result<()> {
    for r in records {
        writeln!(out, "{} {} {}", r.path_a, r.path_b, format.render(r.state))?;
    }
    Ok(())
}

/// 打开的是哪种文件
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListKind {
    /// 两列的图片对列表
    Pairs,
    /// 保存过的三列标注结果
    Annotated,
}

impl ListKind {
    pub fn load(self, path: &Path) -> Result<Session> {
        match self {
            ListKind::Pairs => Session::load(path),
            ListKind::Annotated => Session::load_annotated(path),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AnnotateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

impl Session {
    /// 读取两列的图片对列表
    pub fn load(path: &Path) -> Result<Self> {
        let session = parse_pairs(&read_file(path)?)?;
        tracing::info!(path = %path.display(), pairs = session.len(), "pair list loaded");
        Ok(session)
    }

    /// 读取之前保存的标注结果，继续标注
    pub fn load_annotated(path: &Path) -> Result<Self> {
        let session = parse_annotated(&read_file(path)?)?;
        tracing::info!(
            path = %path.display(),
            pairs = session.len(),
            annotated = session.annotated_count(),
            "annotations loaded"
        );
        Ok(session)
    }

    pub fn save(&self, path: &Path, format: StateFormat) -> Result<()> {
        let to_err = |source| AnnotateError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(to_err)?;
        let mut out = BufWriter::new(file);
        write_records(&mut out, self.records(), format).map_err(to_err)?;
        out.flush().map_err(to_err)?;
        tracing::info!(path = %path.display(), pairs = self.len(), "annotations saved");
        Ok(())
    }
}
