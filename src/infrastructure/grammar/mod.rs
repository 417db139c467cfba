mod checker_factory;
mod language_tool_adapter;
mod mock_grammar_checker;

pub use checker_factory::CheckerFactory;
pub use language_tool_adapter::{LanguageToolAdapter, locate};
pub use mock_grammar_checker::MockGrammarChecker;
