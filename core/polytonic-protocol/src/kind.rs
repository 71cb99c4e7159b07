use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token kind: {0:?}")]
pub struct UnknownKind(pub String);

macro_rules! define_kinds {
    ($( $(#[$meta:meta])* $variant:ident => $name:literal ),+ $(,)?) => {
        /// Lexical categories shared by the Greek lexers and parsers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize))]
        pub enum TokenKind {
            $(
                $(#[$meta])*
                #[cfg_attr(feature = "serde", serde(rename = $name))]
                $variant,
            )+
        }

        impl TokenKind {
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant),+];

            /// The snake_case name used in diagnostics and JSON dumps.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)+
                }
            }
        }

        impl FromStr for TokenKind {
            type Err = UnknownKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(TokenKind::$variant),)+
                    other => Err(UnknownKind(other.to_string())),
                }
            }
        }
    };
}

define_kinds! {
    /// TLG `*` capital marker.
    Uppercase => "uppercase",
    Whitespace => "whitespace",
    Tab => "tab",
    Newline => "newline",
    Digit => "digit",

    Underdot => "underdot",
    Period => "period",
    Comma => "comma",
    Middledot => "middledot",
    Question => "question",
    Apostrophe => "apostrophe",
    Emdash => "emdash",
    Endash => "endash",
    MissingLetter => "missing_letter",

    Acute => "acute",
    Grave => "grave",
    Circumflex => "circumflex",
    Diaeresis => "diaeresis",
    Subscript => "subscript",
    Rough => "rough",
    Smooth => "smooth",
    Macron => "macron",
    Breve => "breve",

    OpenBracket => "open_bracket",
    CloseBracket => "close_bracket",
    OpenParenthesis => "open_parenthesis",
    CloseParenthesis => "close_parenthesis",
    OpenTextFormatting => "open_text_formatting",
    CloseTextFormatting => "close_text_formatting",
    PageFormatting => "page_formatting",
    AdditionalPunctuation => "additional_punctuation",
    AdditionalCharacter => "additional_character",
    QuotationMark => "quotation_mark",
    Markup => "markup",
    CloseMarkup => "close_markup",
    Citation => "citation",
    GreekStyle => "greek_style",
    LatinStyle => "latin_style",

    Alpha => "alpha",
    Beta => "beta",
    Gamma => "gamma",
    Delta => "delta",
    Epsilon => "epsilon",
    Zeta => "zeta",
    Eta => "eta",
    Theta => "theta",
    Iota => "iota",
    Kappa => "kappa",
    Lambda => "lambda",
    Mu => "mu",
    Nu => "nu",
    Xi => "xi",
    Omicron => "omicron",
    Pi => "pi",
    Rho => "rho",
    Sigma => "sigma",
    Tau => "tau",
    Upsilon => "upsilon",
    Phi => "phi",
    Chi => "chi",
    Psi => "psi",
    Omega => "omega",
    Digamma => "digamma",
}

pub const VOWELS: &[TokenKind] = &[
    TokenKind::Alpha,
    TokenKind::Epsilon,
    TokenKind::Eta,
    TokenKind::Iota,
    TokenKind::Omicron,
    TokenKind::Upsilon,
    TokenKind::Omega,
];

pub const CONSONANTS: &[TokenKind] = &[
    TokenKind::Beta,
    TokenKind::Gamma,
    TokenKind::Delta,
    TokenKind::Zeta,
    TokenKind::Theta,
    TokenKind::Kappa,
    TokenKind::Lambda,
    TokenKind::Mu,
    TokenKind::Nu,
    TokenKind::Xi,
    TokenKind::Pi,
    TokenKind::Rho,
    TokenKind::Sigma,
    TokenKind::Tau,
    TokenKind::Phi,
    TokenKind::Chi,
    TokenKind::Psi,
    TokenKind::Digamma,
];

pub const ACCENTS: &[TokenKind] = &[TokenKind::Acute, TokenKind::Grave, TokenKind::Circumflex];
pub const BREATHINGS: &[TokenKind] = &[TokenKind::Rough, TokenKind::Smooth];
pub const MODIFIERS: &[TokenKind] = &[TokenKind::Diaeresis, TokenKind::Subscript];
pub const LENGTH_MARKS: &[TokenKind] = &[TokenKind::Macron, TokenKind::Breve];
pub const SPACES: &[TokenKind] = &[TokenKind::Whitespace, TokenKind::Tab, TokenKind::Newline];

pub const PUNCTUATION: &[TokenKind] = &[
    TokenKind::Comma,
    TokenKind::Period,
    TokenKind::Middledot,
    TokenKind::MissingLetter,
    TokenKind::Question,
    TokenKind::Apostrophe,
    TokenKind::Emdash,
    TokenKind::Endash,
];

pub const EDITORIAL: &[TokenKind] = &[
    TokenKind::OpenBracket,
    TokenKind::CloseBracket,
    TokenKind::OpenParenthesis,
    TokenKind::CloseParenthesis,
    TokenKind::OpenTextFormatting,
    TokenKind::CloseTextFormatting,
    TokenKind::PageFormatting,
    TokenKind::AdditionalPunctuation,
    TokenKind::AdditionalCharacter,
    TokenKind::QuotationMark,
    TokenKind::Markup,
    TokenKind::CloseMarkup,
    TokenKind::Citation,
    TokenKind::GreekStyle,
    TokenKind::LatinStyle,
];

impl TokenKind {
    pub fn is_vowel(self) -> bool {
        VOWELS.contains(&self)
    }

    pub fn is_consonant(self) -> bool {
        CONSONANTS.contains(&self)
    }

    pub fn is_letter(self) -> bool {
        self.is_vowel() || self.is_consonant()
    }

    pub fn is_accent(self) -> bool {
        ACCENTS.contains(&self)
    }

    pub fn is_breathing(self) -> bool {
        BREATHINGS.contains(&self)
    }

    pub fn is_modifier(self) -> bool {
        MODIFIERS.contains(&self)
    }

    pub fn is_length_mark(self) -> bool {
        LENGTH_MARKS.contains(&self)
    }

    pub fn is_diacritic(self) -> bool {
        self.is_accent() || self.is_breathing() || self.is_modifier() || self.is_length_mark()
    }

    pub fn is_space(self) -> bool {
        SPACES.contains(&self)
    }

    pub fn is_punctuation(self) -> bool {
        PUNCTUATION.contains(&self)
    }

    pub fn is_editorial(self) -> bool {
        EDITORIAL.contains(&self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.as_str().parse::<TokenKind>(), Ok(*kind));
        }
        assert_eq!(
            "koppa".parse::<TokenKind>(),
            Err(UnknownKind("koppa".to_string()))
        );
    }

    #[test]
    fn test_classes_are_disjoint() {
        for kind in TokenKind::ALL {
            let classes = [
                kind.is_letter(),
                kind.is_diacritic(),
                kind.is_space(),
                kind.is_punctuation(),
                kind.is_editorial(),
            ];
            assert!(classes.iter().filter(|c| **c).count() <= 1, "{kind} is in two classes");
        }
        assert_eq!(VOWELS.len() + CONSONANTS.len(), 25);
    }

    #[test]
    fn test_diacritic_helpers() {
        assert!(TokenKind::Rough.is_breathing());
        assert!(TokenKind::Smooth.is_breathing());
        assert!(!TokenKind::Diaeresis.is_breathing());
        assert!(!TokenKind::Acute.is_breathing());

        assert!(TokenKind::Acute.is_accent());
        assert!(TokenKind::Grave.is_accent());
        assert!(TokenKind::Circumflex.is_accent());
        assert!(!TokenKind::Subscript.is_accent());
        assert!(!TokenKind::Smooth.is_accent());

        assert!(TokenKind::Diaeresis.is_modifier());
        assert!(TokenKind::Subscript.is_modifier());
        assert!(!TokenKind::Circumflex.is_modifier());
        assert!(!TokenKind::Rough.is_modifier());
    }
}
