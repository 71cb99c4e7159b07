//! Lexing and parsing of polytonic Greek text.
//!
//! [`Lexer`] and [`ParserBase`](parser::ParserBase) are generic; the
//! `betacode` and `unicode` modules build the Greek readers on top of them,
//! each producing the same character AST.

pub mod betacode;
pub mod character;
pub mod detect;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod unicode;

pub use betacode::{TlgBetacodeParser, TypeGreekBetacodeParser};
pub use detect::identify_encoding;
pub use error::ParseError;
pub use lexer::{Lexer, RuleError, UnexpectedCharacter};
pub use parser::{ParserBase, ParserState};
pub use unicode::UnicodeGreekParser;

use polytonic_protocol::{CharacterNode, Encoding};

/// Parse `text` with the reader for `encoding`. Returns `None` for
/// [`Encoding::Unknown`].
pub fn parse_as(encoding: Encoding, text: &str) -> Option<Result<Vec<CharacterNode>, ParseError>> {
    let result = match encoding {
        Encoding::TlgBetaCode => TlgBetacodeParser::new().parse(text),
        Encoding::TypegreekBetaCode => TypeGreekBetacodeParser::new().parse(text),
        Encoding::Unicode | Encoding::UnicodePrecomposed | Encoding::UnicodeCombining => {
            UnicodeGreekParser::new().parse(text)
        }
        Encoding::Unknown => return None,
    };
    Some(result)
}
