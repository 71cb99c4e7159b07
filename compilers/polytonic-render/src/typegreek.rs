use polytonic_protocol::{
    CharacterVisitor, Consonant, EditorialSymbol, Encoding, Punctuation, Space, TokenKind, Vowel,
    WordPosition,
};

use crate::error::RenderError;
use crate::glyphs::{betacode_letter, betacode_mark};
use crate::tlg::space_sigil;
use crate::Renderer;

const TARGET: Encoding = Encoding::TypegreekBetaCode;

fn punctuation_sigil(kind: TokenKind) -> Option<char> {
    let sigil = match kind {
        TokenKind::Period => '.',
        TokenKind::Comma => ',',
        TokenKind::Middledot => ':',
        TokenKind::Question => '?',
        TokenKind::Apostrophe => '\'',
        _ => return None,
    };
    Some(sigil)
}

/// Writes TypeGreek beta code. Letter case carries capitalization and
/// every mark follows its letter.
///
/// TypeGreek has no length marks, digits or editorial sigils; meeting one
/// is an error rather than a silent loss.
#[derive(Debug, Default)]
pub struct TypeGreekBetacodeVisitor {
    output: String,
}

impl TypeGreekBetacodeVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_letter(&mut self, kind: TokenKind, is_uppercase: bool) -> Result<(), RenderError> {
        let letter = betacode_letter(kind, TARGET)?;
        self.output.push(if is_uppercase {
            letter
        } else {
            letter.to_ascii_lowercase()
        });
        Ok(())
    }

    fn push_mark(&mut self, kind: Option<TokenKind>) {
        if let Some(mark) = kind.and_then(betacode_mark) {
            self.output.push_str(mark);
        }
    }
}

impl CharacterVisitor for TypeGreekBetacodeVisitor {
    type Error = RenderError;

    fn visit_vowel(&mut self, vowel: &Vowel) -> Result<(), RenderError> {
        if let Some(length) = vowel.length_kind() {
            return Err(RenderError::unrepresentable(length.as_str(), TARGET));
        }
        self.push_letter(vowel.kind(), vowel.is_uppercase)?;
        self.push_mark(vowel.breathing_kind());
        self.push_mark(vowel.accent_kind());
        self.push_mark(vowel.modifier_kind());
        if vowel.has_underdot {
            self.output.push('@');
        }
        Ok(())
    }

    fn visit_consonant(&mut self, consonant: &Consonant, _position: WordPosition) -> Result<(), RenderError> {
        // Sigma forms are positional in TypeGreek; the lunate form is lost.
        self.push_letter(consonant.kind(), consonant.is_uppercase)?;
        self.push_mark(consonant.breathing_kind());
        if consonant.has_underdot {
            self.output.push('@');
        }
        Ok(())
    }

    fn visit_punctuation(&mut self, punctuation: &Punctuation) -> Result<(), RenderError> {
        let kind = punctuation.punctuation_type.kind;
        let sigil =
            punctuation_sigil(kind).ok_or_else(|| RenderError::unrepresentable(kind.as_str(), TARGET))?;
        self.output.push(sigil);
        Ok(())
    }

    fn visit_editorial_symbol(&mut self, symbol: &EditorialSymbol) -> Result<(), RenderError> {
        Err(RenderError::unrepresentable(
            symbol.symbol_type.kind.as_str(),
            TARGET,
        ))
    }

    fn visit_space(&mut self, space: &Space) -> Result<(), RenderError> {
        self.output.push_str(space_sigil(space));
        Ok(())
    }
}

impl Renderer for TypeGreekBetacodeVisitor {
    fn finish(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use polytonic_parser::{ParserBase, TlgBetacodeParser, TypeGreekBetacodeParser, UnicodeGreekParser};

    const ILIAD_TYPEGREEK: &str = r"Mh=nin a)/eide qea\ Phlhi+a/dew A)xilh=os";

    fn from_tlg(text: &str) -> Result<String, RenderError> {
        let ast = TlgBetacodeParser::new().parse(text).unwrap();
        render(&ast, &mut TypeGreekBetacodeVisitor::new())
    }

    #[test]
    fn test_iliad_from_tlg() {
        assert_eq!(
            from_tlg(r"*MH=NIN A)/EIDE QEA\ *PHLHI+A/DEW *)AXILH=OS").unwrap(),
            ILIAD_TYPEGREEK
        );
    }

    #[test]
    fn test_round_trip() {
        let text = "W(=|@ R( Ra@, a: a? a' a.";
        let ast = TypeGreekBetacodeParser::new().parse(text).unwrap();
        assert_eq!(render(&ast, &mut TypeGreekBetacodeVisitor::new()).unwrap(), text);
    }

    #[test]
    fn test_unrepresentable() {
        assert_eq!(
            from_tlg("A%27"),
            Err(RenderError::Unrepresentable {
                what: "macron".to_string(),
                target: Encoding::TypegreekBetaCode
            })
        );
        assert!(from_tlg("A_").is_err());
        assert!(from_tlg("[A]").is_err());
        assert!(from_tlg("@1").is_err());
    }

    #[test]
    fn test_from_unicode() {
        let ast = UnicodeGreekParser::new().parse("ῥόδον ϲοφὸς").unwrap();
        assert_eq!(
            render(&ast, &mut TypeGreekBetacodeVisitor::new()).unwrap(),
            r"r(o/don sofo\s"
        );
    }
}
