//! Row classification and question/answer grouping.

mod grouper;
mod row_kind;

pub use grouper::{GroupEvent, QuestionRecord, RecordGrouper, group_rows};
pub use row_kind::RowKind;
