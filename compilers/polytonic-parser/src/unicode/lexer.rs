//! Rules for decomposed (NFD) Unicode Greek.
//!
//! Precomposed letters are not matched here: callers decompose first, so a
//! vowel arrives as a base letter followed by its combining marks.

use once_cell::sync::Lazy;
use polytonic_protocol::{SigmaForm, TokenKind};

use crate::lexer::{integer_value, Lexer, RuleError};

const RULES: &[(TokenKind, &str)] = &[
    // Alphabetic, both cases and the symbol variants
    (TokenKind::Alpha, "[αΑ]"),
    (TokenKind::Beta, "[βΒϐ]"),
    (TokenKind::Gamma, "[γΓ]"),
    (TokenKind::Delta, "[δΔ]"),
    (TokenKind::Epsilon, "[εΕϵ]"),
    (TokenKind::Zeta, "[ζΖ]"),
    (TokenKind::Eta, "[ηΗ]"),
    (TokenKind::Theta, "[θΘϑ]"),
    (TokenKind::Iota, "[ιΙ]"),
    (TokenKind::Kappa, "[κΚϰ]"),
    (TokenKind::Lambda, "[λΛ]"),
    (TokenKind::Mu, "[μΜ]"),
    (TokenKind::Nu, "[νΝ]"),
    (TokenKind::Xi, "[ξΞ]"),
    (TokenKind::Omicron, "[οΟ]"),
    (TokenKind::Pi, "[πΠϖ]"),
    (TokenKind::Rho, "[ρΡϱ]"),
    (TokenKind::Sigma, "[σΣ]"),
    (TokenKind::Tau, "[τΤ]"),
    (TokenKind::Upsilon, "[υΥϒ]"),
    (TokenKind::Phi, "[φΦϕ]"),
    (TokenKind::Chi, "[χΧ]"),
    (TokenKind::Psi, "[ψΨ]"),
    (TokenKind::Omega, "[ωΩ]"),
    (TokenKind::Digamma, "[ϝϜ]"),
    // Combining accents
    (TokenKind::Acute, "\u{0301}"),
    (TokenKind::Grave, "\u{0300}"),
    (TokenKind::Circumflex, "[\u{0342}\u{0302}]"),
    // Combining modifiers
    (TokenKind::Diaeresis, "\u{0308}"),
    (TokenKind::Subscript, "\u{0345}"),
    // Combining breathings
    (TokenKind::Smooth, "\u{0313}"),
    (TokenKind::Rough, "\u{0314}"),
    // Combining quantity
    (TokenKind::Macron, "\u{0304}"),
    (TokenKind::Breve, "\u{0306}"),
    (TokenKind::Underdot, "\u{0323}"),
    // Punctuation
    (TokenKind::Period, r"\."),
    (TokenKind::Comma, ","),
    (TokenKind::Middledot, "[:\u{00B7}]"),
    (TokenKind::Question, ";"),
    (TokenKind::Apostrophe, "['\u{2019}\u{02BC}\u{1FBD}]"),
    (TokenKind::Emdash, "\u{2014}"),
    (TokenKind::Endash, "[\u{2013}-]"),
    (TokenKind::MissingLetter, "\u{25CC}"),
    // Editorial symbols
    (TokenKind::OpenParenthesis, r"\("),
    (TokenKind::CloseParenthesis, r"\)"),
    (TokenKind::OpenBracket, r"\["),
    (TokenKind::CloseBracket, r"\]"),
    (TokenKind::OpenTextFormatting, "<"),
    (TokenKind::CloseTextFormatting, ">"),
    (TokenKind::Markup, r"\{"),
    (TokenKind::CloseMarkup, r"\}"),
    (TokenKind::PageFormatting, "@"),
    // Stray ASCII marks and typographic signs a precomposed text may carry
    (TokenKind::AdditionalPunctuation, "[%!?*+/=\u{2020}\u{2021}\u{2026}]"),
    (TokenKind::AdditionalCharacter, "[#\u{2E00}-\u{2E7F}]"),
    (TokenKind::QuotationMark, "[\"\u{00AB}\u{00BB}\u{201C}\u{201D}]"),
    (TokenKind::Citation, "~"),
    (TokenKind::GreekStyle, r"\$"),
    (TokenKind::LatinStyle, "&"),
    // Misc.
    (TokenKind::Whitespace, "[ \u{00A0}\u{2000}-\u{200A}\u{202F}\u{205F}]"),
    (TokenKind::Tab, r"\t"),
    (TokenKind::Newline, r"\r?\n"),
];

fn final_sigma(_: &str) -> Option<i64> {
    Some(SigmaForm::Final.digit() as i64)
}

fn lunate_sigma(_: &str) -> Option<i64> {
    Some(SigmaForm::Lunate.digit() as i64)
}

fn build_lexer() -> Result<Lexer<TokenKind>, RuleError> {
    RULES
        .iter()
        .try_fold(Lexer::new(), |lexer, (kind, pattern)| lexer.add_rule(*kind, pattern))?
        .add_rule_with(TokenKind::Sigma, "ς", final_sigma)?
        .add_rule_with(TokenKind::Sigma, "[ϲϹ]", lunate_sigma)?
        .add_rule_with(TokenKind::Digit, "[0-9]+", integer_value)
}

pub static UNICODE_GREEK_LEXER: Lazy<Lexer<TokenKind>> =
    Lazy::new(|| build_lexer().expect("Unicode Greek rules compile"));
