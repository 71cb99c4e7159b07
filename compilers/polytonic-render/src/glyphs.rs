//! Letter and mark tables shared by the visitors.

use polytonic_protocol::{Encoding, TokenKind};

use crate::error::RenderError;

/// Beta code letter, upper case.
pub fn betacode_letter(kind: TokenKind, target: Encoding) -> Result<char, RenderError> {
    let letter = match kind {
        TokenKind::Alpha => 'A',
        TokenKind::Beta => 'B',
        TokenKind::Gamma => 'G',
        TokenKind::Delta => 'D',
        TokenKind::Epsilon => 'E',
        TokenKind::Zeta => 'Z',
        TokenKind::Eta => 'H',
        TokenKind::Theta => 'Q',
        TokenKind::Iota => 'I',
        TokenKind::Kappa => 'K',
        TokenKind::Lambda => 'L',
        TokenKind::Mu => 'M',
        TokenKind::Nu => 'N',
        TokenKind::Xi => 'C',
        TokenKind::Omicron => 'O',
        TokenKind::Pi => 'P',
        TokenKind::Rho => 'R',
        TokenKind::Sigma => 'S',
        TokenKind::Tau => 'T',
        TokenKind::Upsilon => 'U',
        TokenKind::Phi => 'F',
        TokenKind::Chi => 'X',
        TokenKind::Psi => 'Y',
        TokenKind::Omega => 'W',
        TokenKind::Digamma => 'V',
        other => return Err(RenderError::unrepresentable(format!("{other} as a letter"), target)),
    };
    Ok(letter)
}

/// Beta code for a diacritic, shared by both conventions.
pub fn betacode_mark(kind: TokenKind) -> Option<&'static str> {
    let mark = match kind {
        TokenKind::Acute => "/",
        TokenKind::Grave => "\\",
        TokenKind::Circumflex => "=",
        TokenKind::Diaeresis => "+",
        TokenKind::Subscript => "|",
        TokenKind::Rough => "(",
        TokenKind::Smooth => ")",
        _ => return None,
    };
    Some(mark)
}

/// Greek base letter. Sigma is the medial form; callers pick other forms.
pub fn greek_letter(kind: TokenKind, uppercase: bool) -> Result<char, RenderError> {
    let (lower, upper) = match kind {
        TokenKind::Alpha => ('α', 'Α'),
        TokenKind::Beta => ('β', 'Β'),
        TokenKind::Gamma => ('γ', 'Γ'),
        TokenKind::Delta => ('δ', 'Δ'),
        TokenKind::Epsilon => ('ε', 'Ε'),
        TokenKind::Zeta => ('ζ', 'Ζ'),
        TokenKind::Eta => ('η', 'Η'),
        TokenKind::Theta => ('θ', 'Θ'),
        TokenKind::Iota => ('ι', 'Ι'),
        TokenKind::Kappa => ('κ', 'Κ'),
        TokenKind::Lambda => ('λ', 'Λ'),
        TokenKind::Mu => ('μ', 'Μ'),
        TokenKind::Nu => ('ν', 'Ν'),
        TokenKind::Xi => ('ξ', 'Ξ'),
        TokenKind::Omicron => ('ο', 'Ο'),
        TokenKind::Pi => ('π', 'Π'),
        TokenKind::Rho => ('ρ', 'Ρ'),
        TokenKind::Sigma => ('σ', 'Σ'),
        TokenKind::Tau => ('τ', 'Τ'),
        TokenKind::Upsilon => ('υ', 'Υ'),
        TokenKind::Phi => ('φ', 'Φ'),
        TokenKind::Chi => ('χ', 'Χ'),
        TokenKind::Psi => ('ψ', 'Ψ'),
        TokenKind::Omega => ('ω', 'Ω'),
        TokenKind::Digamma => ('ϝ', 'Ϝ'),
        other => {
            return Err(RenderError::unrepresentable(
                format!("{other} as a letter"),
                Encoding::Unicode,
            ))
        }
    };
    Ok(if uppercase { upper } else { lower })
}

/// Combining code point for a diacritic or the underdot.
pub fn combining_mark(kind: TokenKind) -> Option<char> {
    let mark = match kind {
        TokenKind::Acute => '\u{0301}',
        TokenKind::Grave => '\u{0300}',
        TokenKind::Circumflex => '\u{0342}',
        TokenKind::Diaeresis => '\u{0308}',
        TokenKind::Subscript => '\u{0345}',
        TokenKind::Smooth => '\u{0313}',
        TokenKind::Rough => '\u{0314}',
        TokenKind::Macron => '\u{0304}',
        TokenKind::Breve => '\u{0306}',
        TokenKind::Underdot => '\u{0323}',
        _ => return None,
    };
    Some(mark)
}

pub fn greek_punctuation(kind: TokenKind) -> Option<&'static str> {
    let glyph = match kind {
        TokenKind::Period => ".",
        TokenKind::Comma => ",",
        TokenKind::Middledot => "\u{00B7}",
        TokenKind::Question => ";",
        TokenKind::Apostrophe => "\u{2019}",
        TokenKind::Emdash => "\u{2014}",
        TokenKind::Endash => "\u{2013}",
        TokenKind::MissingLetter => "\u{25CC}",
        _ => return None,
    };
    Some(glyph)
}
