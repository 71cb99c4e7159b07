pub mod tlg;
pub mod typegreek;

pub use tlg::{TlgBetacodeParser, TLG_BETACODE_LEXER};
pub use typegreek::{TypeGreekBetacodeParser, TYPEGREEK_BETACODE_LEXER};
