use polytonic_protocol::{factory, CharacterNode, ConsonantData, TokenKind, VowelData};
use unicode_normalization::UnicodeNormalization;

use crate::character::{
    editorial_symbol, impl_character_parser, match_where, number, parse_elements,
    previous_token, punctuation, space, CharacterParserState,
};
use crate::error::ParseError;
use crate::parser::ParserBase;
use crate::syntax::is_upper;

use super::lexer::UNICODE_GREEK_LEXER;

/// Parses Unicode Greek, precomposed or combining, into the character AST.
///
/// Input is decomposed (NFD) first. Error diagrams therefore quote the
/// decomposed text and count columns in decomposed characters.
#[derive(Debug, Clone, Default)]
pub struct UnicodeGreekParser {
    state: CharacterParserState,
}

impl_character_parser!(UnicodeGreekParser);

impl UnicodeGreekParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_text(&mut self, text: &str) -> Result<Vec<CharacterNode>, ParseError> {
        self.reset();
        let decomposed: String = text.nfd().collect();
        let tokens = UNICODE_GREEK_LEXER.tokenize(&decomposed, &[])?;
        self.state.load(&decomposed, tokens);
        parse_elements(self, Self::parse_element)
    }

    fn parse_element(&mut self) -> Option<CharacterNode> {
        if match_where(self, TokenKind::is_vowel) {
            return self.parse_vowel();
        }
        if match_where(self, TokenKind::is_consonant) {
            return self.parse_consonant();
        }
        if match_where(self, TokenKind::is_punctuation) {
            return punctuation(self);
        }
        if match_where(self, TokenKind::is_editorial) {
            return editorial_symbol(self);
        }
        if match_where(self, TokenKind::is_space) {
            return space(self);
        }
        if self.match_any(&[TokenKind::Digit]) {
            return number(self);
        }
        // A combining mark with no letter to sit on.
        self.consume(TokenKind::Alpha, "Expected a vowel");
        None
    }

    fn parse_vowel(&mut self) -> Option<CharacterNode> {
        let name = previous_token(self)?;
        let is_uppercase = is_upper(&name.lexeme);
        let mut data = VowelData::new(name).uppercase(is_uppercase);

        loop {
            if match_where(self, TokenKind::is_diacritic) {
                if let Some(mark) = previous_token(self) {
                    let _ = data.set_mark(mark);
                }
            } else if self.match_any(&[TokenKind::Underdot]) {
                data.has_underdot = true;
            } else {
                break;
            }
        }
        Some(factory::vowel(data))
    }

    fn parse_consonant(&mut self) -> Option<CharacterNode> {
        let name = previous_token(self)?;
        let is_uppercase = is_upper(&name.lexeme);
        let mut data = ConsonantData::new(name).uppercase(is_uppercase);

        loop {
            if data.name.kind == TokenKind::Rho && match_where(self, TokenKind::is_breathing) {
                data.annotation.breathing = previous_token(self);
            } else if self.match_any(&[TokenKind::Underdot]) {
                data.has_underdot = true;
            } else {
                break;
            }
        }
        Some(factory::consonant(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polytonic_protocol::SigmaForm;

    const ILIAD_1_1: &str = "Μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος";

    #[test]
    fn test_parse_iliad() {
        let ast = UnicodeGreekParser::new().parse(ILIAD_1_1).unwrap();
        assert_eq!(ast.len(), 33);

        let eta = ast[1].as_vowel().unwrap();
        assert_eq!(eta.accent_kind(), Some(TokenKind::Circumflex));

        let alpha = ast[6].as_vowel().unwrap();
        assert_eq!(alpha.breathing_kind(), Some(TokenKind::Smooth));
        assert_eq!(alpha.accent_kind(), Some(TokenKind::Acute));

        let iota = ast[20].as_vowel().unwrap();
        assert_eq!(iota.modifier_kind(), Some(TokenKind::Diaeresis));

        let capital_alpha = ast[26].as_vowel().unwrap();
        assert!(capital_alpha.is_uppercase);
        assert_eq!(capital_alpha.breathing_kind(), Some(TokenKind::Smooth));

        let sigma = ast[32].as_consonant().unwrap();
        assert_eq!(sigma.sigma_form(), Some(SigmaForm::Final));
    }

    #[test]
    fn test_precomposed_and_combining_agree() {
        let precomposed = "ᾧ ῥόδον";
        let combining: String = precomposed.nfd().collect();
        let mut parser = UnicodeGreekParser::new();
        assert_eq!(parser.parse(precomposed), parser.parse(&combining));
    }

    #[test]
    fn test_rho_breathing_and_subscript() {
        let ast = UnicodeGreekParser::new().parse("ᾧ ῥ").unwrap();
        let omega = ast[0].as_vowel().unwrap();
        assert_eq!(omega.breathing_kind(), Some(TokenKind::Rough));
        assert_eq!(omega.accent_kind(), Some(TokenKind::Circumflex));
        assert_eq!(omega.modifier_kind(), Some(TokenKind::Subscript));
        assert_eq!(
            ast[2].as_consonant().unwrap().breathing_kind(),
            Some(TokenKind::Rough)
        );
    }

    #[test]
    fn test_length_marks_and_underdot() {
        let ast = UnicodeGreekParser::new().parse("ᾱ\u{0323}ῠ").unwrap();
        let alpha = ast[0].as_vowel().unwrap();
        assert_eq!(alpha.length_kind(), Some(TokenKind::Macron));
        assert!(alpha.has_underdot);
        assert_eq!(ast[1].as_vowel().unwrap().length_kind(), Some(TokenKind::Breve));
    }

    #[test]
    fn test_editorial_and_numbers() {
        let ast = UnicodeGreekParser::new().parse("[ἀ]@73 5").unwrap();
        assert_eq!(ast.len(), 6);
        assert!(matches!(
            &ast[3],
            CharacterNode::EditorialSymbol(e) if e.value == Some(73)
        ));
        assert!(matches!(
            &ast[5],
            CharacterNode::EditorialSymbol(e) if e.symbol_type.kind == TokenKind::Digit
        ));
    }

    #[test]
    fn test_stray_combining_mark() {
        let err = UnicodeGreekParser::new().parse("\u{0301}α").unwrap_err();
        assert!(matches!(err, ParseError::Syntax(ref m) if m.len() == 1));
    }

    #[test]
    fn test_latin_is_lexical_error() {
        assert!(matches!(
            UnicodeGreekParser::new().parse("abc"),
            Err(ParseError::Lexical(_))
        ));
    }
}
