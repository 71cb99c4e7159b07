pub mod lexer;
pub mod parser;

pub use lexer::UNICODE_GREEK_LEXER;
pub use parser::UnicodeGreekParser;
