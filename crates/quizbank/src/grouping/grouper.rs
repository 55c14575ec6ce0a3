//! Question/answer grouping.
//!
//! Grouping is a two-state automaton driven by classified rows:
//!
//! | state               | Q row                         | A row             | unknown kind |
//! |---------------------|-------------------------------|-------------------|--------------|
//! | `NoCurrentQuestion` | open record                   | warn, drop        | warn, drop   |
//! | `InQuestion`        | emit open record, open new    | append to answers | warn, drop   |
//!
//! Rows with an empty kind are skipped silently. At end of input an open
//! record is emitted. The grouper is a lazy iterator over rows, so it can be
//! driven by any row source.

use serde::{Deserialize, Serialize};

use super::row_kind::RowKind;
use crate::input::RawRow;
use crate::warning::ConversionWarning;

/// A question row and the answer rows that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The question row.
    pub metadata: RawRow,
    /// Answer rows in source order.
    pub answers: Vec<RawRow>,
}

impl QuestionRecord {
    /// Open a record with no answers yet.
    pub fn new(metadata: RawRow) -> Self {
        Self {
            metadata,
            answers: Vec::new(),
        }
    }

    pub fn with_answers(metadata: RawRow, answers: Vec<RawRow>) -> Self {
        Self { metadata, answers }
    }
}

/// Output of the grouper, in detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupEvent {
    Record(QuestionRecord),
    Warning(ConversionWarning),
}

#[derive(Debug, Default)]
enum GroupState {
    #[default]
    NoCurrentQuestion,
    InQuestion(QuestionRecord),
}

impl GroupState {
    fn transition(self, kind: RowKind, row: RawRow) -> (GroupState, Option<GroupEvent>) {
        match (self, kind) {
            (GroupState::NoCurrentQuestion, RowKind::Question) => {
                (GroupState::InQuestion(QuestionRecord::new(row)), None)
            }
            (GroupState::InQuestion(open), RowKind::Question) => (
                GroupState::InQuestion(QuestionRecord::new(row)),
                Some(GroupEvent::Record(open)),
            ),
            (GroupState::InQuestion(mut open), RowKind::Answer) => {
                open.answers.push(row);
                (GroupState::InQuestion(open), None)
            }
            (GroupState::NoCurrentQuestion, RowKind::Answer) => (
                GroupState::NoCurrentQuestion,
                Some(GroupEvent::Warning(
                    ConversionWarning::AnswerBeforeQuestion { line: row.line },
                )),
            ),
            (state, RowKind::Unknown(value)) => (
                state,
                Some(GroupEvent::Warning(
                    ConversionWarning::UnrecognizedRowKind {
                        value,
                        line: row.line,
                    },
                )),
            ),
        }
    }
}

/// Lazily groups rows into [`QuestionRecord`]s.
#[derive(Debug)]
pub struct RecordGrouper<I> {
    rows: std::iter::Fuse<I>,
    state: GroupState,
}

impl<I> RecordGrouper<I>
where
    I: Iterator<Item = RawRow>,
{
    pub fn new(rows: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            rows: rows.into_iter().fuse(),
            state: GroupState::NoCurrentQuestion,
        }
    }

    fn step(&mut self, row: RawRow) -> Option<GroupEvent> {
        let kind = RowKind::classify(&row)?;
        let state = std::mem::take(&mut self.state);
        let (next, event) = state.transition(kind, row);
        self.state = next;

        if let Some(GroupEvent::Warning(warning)) = &event {
            tracing::debug!(line = warning.line(), "{warning}");
        }
        event
    }
}

impl<I> Iterator for RecordGrouper<I>
where
    I: Iterator<Item = RawRow>,
{
    type Item = GroupEvent;

    fn next(&mut self) -> Option<GroupEvent> {
        while let Some(row) = self.rows.next() {
            if let Some(event) = self.step(row) {
                return Some(event);
            }
        }

        match std::mem::take(&mut self.state) {
            GroupState::InQuestion(open) => Some(GroupEvent::Record(open)),
            GroupState::NoCurrentQuestion => None,
        }
    }
}

/// Group all rows, splitting records from warnings.
pub fn group_rows(
    rows: impl IntoIterator<Item = RawRow>,
) -> (Vec<QuestionRecord>, Vec<ConversionWarning>) {
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for event in RecordGrouper::new(rows) {
        match event {
            GroupEvent::Record(record) => records.push(record),
            GroupEvent::Warning(warning) => warnings.push(warning),
        }
    }

    (records, warnings)
}
