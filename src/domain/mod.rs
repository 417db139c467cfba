mod grammar_report;
mod language_code;
mod note;
mod source_kind;

pub use grammar_report::{GrammarCheckResult, GrammarIssue};
pub use language_code::LanguageCode;
pub use note::{NewNote, Note};
pub use source_kind::SourceKind;
