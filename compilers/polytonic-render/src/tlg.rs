use polytonic_protocol::{
    CharacterVisitor, Consonant, EditorialSymbol, Encoding, Punctuation, SigmaForm, Space, TokenKind,
    Vowel, WordPosition,
};

use crate::error::RenderError;
use crate::glyphs::{betacode_letter, betacode_mark};
use crate::Renderer;

const TARGET: Encoding = Encoding::TlgBetaCode;

fn length_mark(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Macron => Some("%27"),
        TokenKind::Breve => Some("%26"),
        _ => None,
    }
}

fn punctuation_sigil(kind: TokenKind) -> Option<&'static str> {
    let sigil = match kind {
        TokenKind::Period => ".",
        TokenKind::Comma => ",",
        TokenKind::Middledot => ":",
        TokenKind::Question => ";",
        TokenKind::Apostrophe => "'",
        TokenKind::Emdash => "_",
        TokenKind::Endash => "-",
        TokenKind::MissingLetter => "!",
        _ => return None,
    };
    Some(sigil)
}

/// Parentheses have no sigil of their own and become numbered brackets.
fn editorial_sigil(kind: TokenKind) -> Option<&'static str> {
    let sigil = match kind {
        TokenKind::OpenBracket => "[",
        TokenKind::CloseBracket => "]",
        TokenKind::OpenParenthesis => "[1",
        TokenKind::CloseParenthesis => "]1",
        TokenKind::OpenTextFormatting => "<",
        TokenKind::CloseTextFormatting => ">",
        TokenKind::PageFormatting => "@",
        TokenKind::AdditionalPunctuation => "%",
        TokenKind::AdditionalCharacter => "#",
        TokenKind::QuotationMark => "\"",
        TokenKind::Markup => "{",
        TokenKind::CloseMarkup => "}",
        TokenKind::Citation => "~",
        TokenKind::GreekStyle => "$",
        TokenKind::LatinStyle => "&",
        _ => return None,
    };
    Some(sigil)
}

pub(crate) fn space_sigil(space: &Space) -> &'static str {
    match space.token.kind {
        TokenKind::Tab => "\t",
        TokenKind::Newline => "\n",
        _ => " ",
    }
}

/// Writes strict TLG beta code: `*` marks capitals, whose breathing and
/// accent precede the letter.
#[derive(Debug, Default)]
pub struct TlgBetacodeVisitor {
    output: String,
}

impl TlgBetacodeVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_mark(&mut self, kind: Option<TokenKind>) {
        if let Some(mark) = kind.and_then(betacode_mark) {
            self.output.push_str(mark);
        }
    }

    fn push_sigma_digit(&mut self, consonant: &Consonant, position: WordPosition) {
        if let Some(digit) = &consonant.annotation.digit {
            self.output.push_str(&digit.lexeme);
            return;
        }
        let digit = match (consonant.sigma_form(), position) {
            (Some(SigmaForm::Lunate), _) => Some(SigmaForm::Lunate),
            (Some(SigmaForm::Final), WordPosition::Medial) => Some(SigmaForm::Final),
            (Some(SigmaForm::Medial), WordPosition::Final) => Some(SigmaForm::Medial),
            _ => None,
        };
        if let Some(form) = digit {
            self.output.push_str(&form.digit().to_string());
        }
    }
}

impl CharacterVisitor for TlgBetacodeVisitor {
    type Error = RenderError;

    fn visit_vowel(&mut self, vowel: &Vowel) -> Result<(), RenderError> {
        let letter = betacode_letter(vowel.kind(), TARGET)?;
        if vowel.is_uppercase {
            self.output.push('*');
            self.push_mark(vowel.breathing_kind());
            self.push_mark(vowel.accent_kind());
            self.output.push(letter);
        } else {
            self.output.push(letter);
            self.push_mark(vowel.breathing_kind());
            self.push_mark(vowel.accent_kind());
        }
        self.push_mark(vowel.modifier_kind());
        if let Some(length) = vowel.length_kind().and_then(length_mark) {
            self.output.push_str(length);
        }
        if vowel.has_underdot {
            self.output.push('?');
        }
        Ok(())
    }

    fn visit_consonant(&mut self, consonant: &Consonant, position: WordPosition) -> Result<(), RenderError> {
        let letter = betacode_letter(consonant.kind(), TARGET)?;
        if consonant.is_uppercase {
            self.output.push('*');
            self.push_mark(consonant.breathing_kind());
            self.output.push(letter);
        } else {
            self.output.push(letter);
            self.push_mark(consonant.breathing_kind());
        }
        if consonant.kind() == TokenKind::Sigma {
            self.push_sigma_digit(consonant, position);
        }
        if consonant.has_underdot {
            self.output.push('?');
        }
        Ok(())
    }

    fn visit_punctuation(&mut self, punctuation: &Punctuation) -> Result<(), RenderError> {
        let kind = punctuation.punctuation_type.kind;
        let sigil =
            punctuation_sigil(kind).ok_or_else(|| RenderError::unrepresentable(kind.as_str(), TARGET))?;
        self.output.push_str(sigil);
        Ok(())
    }

    fn visit_editorial_symbol(&mut self, symbol: &EditorialSymbol) -> Result<(), RenderError> {
        let token = &symbol.symbol_type;
        if token.kind == TokenKind::Digit {
            self.output.push_str(&token.lexeme);
            return Ok(());
        }
        let sigil = editorial_sigil(token.kind)
            .ok_or_else(|| RenderError::unrepresentable(token.kind.as_str(), TARGET))?;
        self.output.push_str(sigil);
        let numbered = !matches!(
            token.kind,
            TokenKind::OpenParenthesis | TokenKind::CloseParenthesis
        );
        if let (true, Some(digits)) = (numbered, symbol.number_text()) {
            self.output.push_str(digits);
        }
        Ok(())
    }

    fn visit_space(&mut self, space: &Space) -> Result<(), RenderError> {
        self.output.push_str(space_sigil(space));
        Ok(())
    }
}

impl Renderer for TlgBetacodeVisitor {
    fn finish(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
