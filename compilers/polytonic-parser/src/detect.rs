//! Guess which encoding a text is written in.
//!
//! Each classifier answers "could this text be X?" by trying X's lexer (or,
//! for precomposed Unicode, a code point whitelist). The encodings overlap,
//! so [`identify_encoding`] asks from the most restrictive to the most
//! permissive and returns the first match.

use polytonic_protocol::ranges::{COMBINING_DIACRITICALS, PRECOMPOSED_GREEK_ALLOWED};
use polytonic_protocol::Encoding;
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;

use crate::betacode::{TLG_BETACODE_LEXER, TYPEGREEK_BETACODE_LEXER};
use crate::syntax::number_is_in_range;
use crate::unicode::UNICODE_GREEK_LEXER;

pub fn is_tlg_betacode(text: &str) -> bool {
    let verdict = TLG_BETACODE_LEXER.tokenize(text, &[]).is_ok();
    trace!(verdict, "tlg beta code");
    verdict
}

/// TypeGreek never uses the `*` capital marker, which settles most TLG
/// texts before lexing.
pub fn is_typegreek_betacode(text: &str) -> bool {
    let verdict = !text.contains('*') && TYPEGREEK_BETACODE_LEXER.tokenize(text, &[]).is_ok();
    trace!(verdict, "typegreek beta code");
    verdict
}

/// Any mix of precomposed and combining Greek.
pub fn is_unicode_greek(text: &str) -> bool {
    let decomposed: String = text.nfkd().collect();
    let verdict = UNICODE_GREEK_LEXER.tokenize(&decomposed, &[]).is_ok();
    trace!(verdict, "unicode greek");
    verdict
}

/// Greek written only with base letters and combining marks.
pub fn is_combining_greek(text: &str) -> bool {
    let verdict = UNICODE_GREEK_LEXER.tokenize(text, &[]).is_ok();
    trace!(verdict, "combining greek");
    verdict
}

/// Greek written without a single combining mark, drawing only on the Greek
/// blocks, ASCII digits, controls and punctuation.
pub fn is_precomposed_greek(text: &str) -> bool {
    let verdict = text.chars().map(u32::from).all(|cp| {
        !number_is_in_range(cp, COMBINING_DIACRITICALS)
            && PRECOMPOSED_GREEK_ALLOWED
                .iter()
                .any(|range| number_is_in_range(cp, *range))
    });
    trace!(verdict, "precomposed greek");
    verdict
}

pub fn identify_encoding(text: &str) -> Encoding {
    let encoding = if is_typegreek_betacode(text) {
        Encoding::TypegreekBetaCode
    } else if is_tlg_betacode(text) {
        Encoding::TlgBetaCode
    } else if is_precomposed_greek(text) {
        Encoding::UnicodePrecomposed
    } else if is_combining_greek(text) {
        Encoding::UnicodeCombining
    } else if is_unicode_greek(text) {
        Encoding::Unicode
    } else {
        Encoding::Unknown
    };
    debug!(%encoding, chars = text.chars().count(), "identified encoding");
    encoding
}
