//! Glyph assembly shared by the precomposed and combining visitors.
//!
//! Marks are appended in the order length, breathing, diaeresis, accent,
//! underdot, subscript. Canonical reordering and composition are left to
//! the caller.

use polytonic_protocol::{Consonant, EditorialSymbol, Punctuation, SigmaForm, TokenKind, Vowel, WordPosition};

use crate::error::RenderError;
use crate::glyphs::{combining_mark, greek_letter, greek_punctuation};
use polytonic_protocol::Encoding;

pub(crate) fn vowel(vowel: &Vowel) -> Result<String, RenderError> {
    let mut glyphs = String::new();
    glyphs.push(greek_letter(vowel.kind(), vowel.is_uppercase)?);

    let modifier = vowel.modifier_kind();
    let marks = [
        vowel.length_kind(),
        vowel.breathing_kind(),
        modifier.filter(|k| *k == TokenKind::Diaeresis),
        vowel.accent_kind(),
        vowel.has_underdot.then_some(TokenKind::Underdot),
        modifier.filter(|k| *k == TokenKind::Subscript),
    ];
    glyphs.extend(marks.into_iter().flatten().filter_map(combining_mark));
    Ok(glyphs)
}

fn sigma(consonant: &Consonant, position: WordPosition) -> char {
    match (consonant.sigma_form(), consonant.is_uppercase) {
        (Some(SigmaForm::Lunate), true) => 'Ϲ',
        (Some(SigmaForm::Lunate), false) => 'ϲ',
        (_, true) => 'Σ',
        (Some(SigmaForm::Final), false) => 'ς',
        (Some(SigmaForm::Medial), false) => 'σ',
        (None, false) if position == WordPosition::Final => 'ς',
        (None, false) => 'σ',
    }
}

pub(crate) fn consonant(consonant: &Consonant, position: WordPosition) -> Result<String, RenderError> {
    let mut glyphs = String::new();
    if consonant.kind() == TokenKind::Sigma {
        glyphs.push(sigma(consonant, position));
    } else {
        glyphs.push(greek_letter(consonant.kind(), consonant.is_uppercase)?);
    }
    glyphs.extend(consonant.breathing_kind().and_then(combining_mark));
    if consonant.has_underdot {
        glyphs.extend(combining_mark(TokenKind::Underdot));
    }
    Ok(glyphs)
}

pub(crate) fn punctuation(punctuation: &Punctuation, target: Encoding) -> Result<&'static str, RenderError> {
    let kind = punctuation.punctuation_type.kind;
    greek_punctuation(kind).ok_or_else(|| RenderError::unrepresentable(kind.as_str(), target))
}

/// Editorial sigils are written as they appeared in the source, followed
/// by their digits.
pub(crate) fn editorial_symbol(symbol: &EditorialSymbol) -> String {
    let mut glyphs = symbol.symbol_type.lexeme.clone();
    glyphs.push_str(symbol.number_text().unwrap_or_default());
    glyphs
}
