use crate::core::error::{AnnotateError, Result};
use crate::model::annotation::AnnotationState;

/// 一组待标注的图片：左图、右图、标注结果
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PairRecord {
    pub path_a: String,
    pub path_b: String,
    pub state: AnnotationState,
}

impl PairRecord {
    pub fn new(path_a: impl Into<String>, path_b: impl Into<String>) -> Self {
        Self {
            path_a: path_a.into(),
            path_b: path_b.into(),
            state: AnnotationState::Unknown,
        }
    }
}

/// 读取当前记录时游标被拉回的方向
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Clamp {
    InRange,
    /// 越过最后一组，说明全部标完了
    PastEnd,
    BeforeStart,
}

/// 标注会话
///
/// 游标允许暂时越界（标注/翻页后不检查），
/// 下一次读取当前记录时才拉回 [0, N-1]。
#[derive(Debug)]
pub struct Session {
    records: Vec<PairRecord>,
    cursor: isize,
}

impl Session {
    pub fn new(records: Vec<PairRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(AnnotateError::EmptyList);
        }
        Ok(Self { records, cursor: 0 })
    }

    /// 左右两列拼成会话，先检查长度是否一致，再检查是否为空
    pub fn from_columns(left: Vec<String>, right: Vec<String>) -> Result<Self> {
        if left.len() != right.len() {
            return Err(AnnotateError::UnevenList {
                left: left.len(),
                right: right.len(),
            });
        }
        let records = left
            .into_iter()
            .zip(right)
            .map(|(a, b)| PairRecord::new(a, b))
            .collect();
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn records(&self) -> &[PairRecord] {
        &self.records
    }

    pub fn annotated_count(&self) -> usize {
        self.records.iter().filter(|r| r.state.is_annotated()).count()
    }

    pub fn clamp_cursor(&mut self) -> Clamp {
        let last = self.records.len() as isize - 1;
        if self.cursor > last {
            self.cursor = last;
            tracing::debug!(cursor = self.cursor, "cursor clamped to last pair");
            Clamp::PastEnd
        } else if self.cursor < 0 {
            self.cursor = 0;
            tracing::debug!("cursor clamped to first pair");
            Clamp::BeforeStart
        } else {
            Clamp::InRange
        }
    }

    /// 越界时就近取一组来操作，游标本身不动，留给 current() 拉回并提示
    fn index(&self) -> usize {
        let last = self.records.len() as isize - 1;
        self.cursor.clamp(0, last) as usize
    }

    /// 拉回游标后返回当前记录
    pub fn current(&mut self) -> (&PairRecord, Clamp) {
        let clamp = self.clamp_cursor();
        (&self.records[self.cursor as usize], clamp)
    }

    /// 标注当前组并前进一格，前进后不做边界检查
    pub fn annotate(&mut self, state: AnnotationState) {
        let idx = self.index();
        self.records[idx].state = state;
        self.cursor += 1;
    }

    pub fn advance(&mut self, delta: isize) {
        self.cursor = self.cursor.saturating_add(delta);
    }

    /// 进度条拖动后直接跳转
    pub fn scrub_to(&mut self, index: usize) {
        self.cursor = isize::try_from(index).unwrap_or(isize::MAX);
    }

    /// 交换左右两张图，标注结果和游标不变
    pub fn swap_current(&mut self) {
        let idx = self.index();
        let record = &mut self.records[idx];
        std::mem::swap(&mut record.path_a, &mut record.path_b);
    }

    /// 状态栏显示用：(从 1 开始的当前位置, 总数)
    pub fn progress(&self) -> (usize, usize) {
        let last = self.records.len() - 1;
        let pos = self.cursor.clamp(0, last as isize) as usize;
        (pos + 1, self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pairs() -> Session {
        Session::new(vec![
            PairRecord::new("a1.png", "b1.png"),
            PairRecord::new("a2.png", "b2.png"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_session_is_rejected() {
        assert!(matches!(Session::new(Vec::new()), Err(AnnotateError::EmptyList)));
    }

    #[test]
    fn uneven_columns_are_checked_before_empty() {
        let err = Session::from_columns(vec!["a".into()], Vec::new()).unwrap_err();
        assert!(matches!(err, AnnotateError::UnevenList { left: 1, right: 0 }));
    }

    #[test]
    fn annotate_marks_then_advances() {
        let mut session = two_pairs();
        session.annotate(AnnotationState::Yes);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.records()[0].state, AnnotationState::Yes);
        assert_eq!(session.records()[1].state, AnnotationState::Unknown);
    }

    #[test]
    fn annotating_every_pair_reaches_terminal_position() {
        let n = 7;
        let records = (0..n).map(|i| PairRecord::new(format!("a{i}"), format!("b{i}"))).collect();
        let mut session = Session::new(records).unwrap();
        for _ in 0..n {
            session.annotate(AnnotationState::No);
        }
        assert_eq!(session.cursor(), n as isize);
        assert_eq!(session.annotated_count(), n);

        let (record, clamp) = session.current();
        assert_eq!(record.path_a, "a6");
        assert_eq!(clamp, Clamp::PastEnd);
        assert_eq!(session.cursor(), n as isize - 1);
    }

    #[test]
    fn moving_before_start_clamps_to_zero() {
        let mut session = two_pairs();
        session.advance(-1);
        assert_eq!(session.cursor(), -1);
        let (record, clamp) = session.current();
        assert_eq!(record.path_a, "a1.png");
        assert_eq!(clamp, Clamp::BeforeStart);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn in_range_read_leaves_cursor_alone() {
        let mut session = two_pairs();
        session.advance(1);
        let (record, clamp) = session.current();
        assert_eq!(record.path_b, "b2.png");
        assert_eq!(clamp, Clamp::InRange);
    }

    #[test]
    fn swap_twice_is_identity() {
        let mut session = two_pairs();
        session.advance(1);
        session.records[1].state = AnnotationState::Unsure;

        session.swap_current();
        assert_eq!(session.records()[1].path_a, "b2.png");
        assert_eq!(session.records()[1].path_b, "a2.png");

        session.swap_current();
        assert_eq!(session.records()[1], PairRecord {
            path_a: "a2.png".into(),
            path_b: "b2.png".into(),
            state: AnnotationState::Unsure,
        });
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.records()[0].path_a, "a1.png");
    }

    #[test]
    fn out_of_range_edits_keep_the_cursor_for_current() {
        let mut session = two_pairs();
        session.advance(-3);
        session.swap_current();
        assert_eq!(session.records()[0].path_a, "b1.png");
        assert_eq!(session.cursor(), -3);
        assert_eq!(session.current().1, Clamp::BeforeStart);

        session.scrub_to(5);
        session.annotate(AnnotationState::Unsure);
        assert_eq!(session.records()[1].state, AnnotationState::Unsure);
        assert_eq!(session.cursor(), 6);
        assert_eq!(session.current().1, Clamp::PastEnd);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn single_pair_session_finishes_after_one_mark() {
        let mut session = Session::new(vec![PairRecord::new("only_a.png", "only_b.png")]).unwrap();
        assert_eq!(session.progress(), (1, 1));

        session.annotate(AnnotationState::Yes);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.progress(), (1, 1));

        let (record, clamp) = session.current();
        assert_eq!(record.state, AnnotationState::Yes);
        assert_eq!(clamp, Clamp::PastEnd);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn scrub_sets_cursor_directly() {
        let mut session = two_pairs();
        session.scrub_to(1);
        assert_eq!(session.cursor(), 1);
        session.scrub_to(10);
        assert_eq!(session.current().1, Clamp::PastEnd);
    }

    #[test]
    fn progress_is_one_based_and_clamped() {
        let mut session = two_pairs();
        assert_eq!(session.progress(), (1, 2));
        session.advance(5);
        assert_eq!(session.progress(), (2, 2));
    }
}
