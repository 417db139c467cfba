mod grammar_report_test;
mod language_code_test;
