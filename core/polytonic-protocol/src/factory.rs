//! Plain data records and the constructors that turn them into AST nodes.
//!
//! Parsers collect what they see into a record and hand it over once the
//! character is complete; they never build node structs field by field.

use crate::character::{
    Annotation, CharacterNode, Consonant, EditorialSymbol, Punctuation, Space, Vowel,
};
use crate::kind::TokenKind;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VowelData {
    pub name: Token,
    pub accent: Option<Token>,
    pub breathing: Option<Token>,
    pub modifier: Option<Token>,
    pub length_mark: Option<Token>,
    pub is_uppercase: bool,
    pub has_underdot: bool,
}

impl VowelData {
    pub fn new(name: Token) -> Self {
        Self {
            name,
            accent: None,
            breathing: None,
            modifier: None,
            length_mark: None,
            is_uppercase: false,
            has_underdot: false,
        }
    }

    pub fn uppercase(mut self, is_uppercase: bool) -> Self {
        self.is_uppercase = is_uppercase;
        self
    }

    /// File a diacritic under its class. A later mark of the same class
    /// replaces the earlier one. Tokens that are not diacritics are handed
    /// back unchanged.
    pub fn set_mark(&mut self, mark: Token) -> Result<(), Token> {
        let slot = if mark.kind.is_accent() {
            &mut self.accent
        } else if mark.kind.is_breathing() {
            &mut self.breathing
        } else if mark.kind.is_modifier() {
            &mut self.modifier
        } else if mark.kind.is_length_mark() {
            &mut self.length_mark
        } else {
            return Err(mark);
        };
        *slot = Some(mark);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsonantData {
    pub name: Token,
    pub is_uppercase: bool,
    pub has_underdot: bool,
    pub annotation: Annotation,
}

impl ConsonantData {
    pub fn new(name: Token) -> Self {
        Self {
            name,
            is_uppercase: false,
            has_underdot: false,
            annotation: Annotation::default(),
        }
    }

    pub fn uppercase(mut self, is_uppercase: bool) -> Self {
        self.is_uppercase = is_uppercase;
        self
    }
}

pub fn vowel(data: VowelData) -> CharacterNode {
    debug_assert!(data.name.kind.is_vowel(), "{} is not a vowel", data.name.kind);
    CharacterNode::Vowel(Vowel {
        name: data.name,
        accent: data.accent,
        breathing: data.breathing,
        modifier: data.modifier,
        length_mark: data.length_mark,
        is_uppercase: data.is_uppercase,
        has_underdot: data.has_underdot,
    })
}

pub fn consonant(data: ConsonantData) -> CharacterNode {
    debug_assert!(
        data.name.kind.is_consonant(),
        "{} is not a consonant",
        data.name.kind
    );
    CharacterNode::Consonant(Consonant {
        name: data.name,
        is_uppercase: data.is_uppercase,
        has_underdot: data.has_underdot,
        annotation: data.annotation,
    })
}

pub fn punctuation(punctuation_type: Token) -> CharacterNode {
    CharacterNode::Punctuation(Punctuation { punctuation_type })
}

/// An editorial sigil with the digit run that followed it, if any. A
/// standalone digit run is passed as `symbol_type` and carries its own value.
pub fn editorial_symbol(symbol_type: Token, number: Option<Token>) -> CharacterNode {
    let value = match &number {
        Some(digits) => digits.value,
        None if symbol_type.kind == TokenKind::Digit => symbol_type.value,
        None => None,
    };
    CharacterNode::EditorialSymbol(EditorialSymbol {
        symbol_type,
        number,
        value,
    })
}

pub fn space(token: Token) -> CharacterNode {
    CharacterNode::Space(Space { token })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_defaults() {
        let node = vowel(VowelData::new(Token::synthetic(TokenKind::Alpha, "a")));
        let v = node.as_vowel().unwrap();
        assert!(v.accent.is_none());
        assert!(v.breathing.is_none());
        assert!(v.modifier.is_none());
        assert!(v.length_mark.is_none());
        assert!(!v.is_uppercase);
        assert!(!v.has_underdot);
    }

    #[test]
    fn test_set_mark_last_of_class_wins() {
        let mut data = VowelData::new(Token::synthetic(TokenKind::Omega, "w"));
        data.set_mark(Token::synthetic(TokenKind::Acute, "/")).unwrap();
        data.set_mark(Token::synthetic(TokenKind::Rough, "(")).unwrap();
        data.set_mark(Token::synthetic(TokenKind::Circumflex, "=")).unwrap();
        data.set_mark(Token::synthetic(TokenKind::Subscript, "|")).unwrap();
        data.set_mark(Token::synthetic(TokenKind::Macron, "%27")).unwrap();

        let comma = Token::synthetic(TokenKind::Comma, ",");
        assert_eq!(data.set_mark(comma.clone()), Err(comma));

        let node = vowel(data.uppercase(true));
        let v = node.as_vowel().unwrap();
        assert_eq!(v.accent_kind(), Some(TokenKind::Circumflex));
        assert_eq!(v.breathing_kind(), Some(TokenKind::Rough));
        assert_eq!(v.modifier_kind(), Some(TokenKind::Subscript));
        assert_eq!(v.length_kind(), Some(TokenKind::Macron));
        assert!(v.is_uppercase);
    }

    #[test]
    fn test_other_nodes() {
        let mut data = ConsonantData::new(Token::synthetic(TokenKind::Rho, "r"));
        data.annotation.breathing = Some(Token::synthetic(TokenKind::Rough, "("));
        let rho = consonant(data);
        assert_eq!(
            rho.as_consonant().unwrap().breathing_kind(),
            Some(TokenKind::Rough)
        );

        let digits = Token::synthetic(TokenKind::Digit, "073").with_value(Some(73));
        let page = editorial_symbol(Token::synthetic(TokenKind::PageFormatting, "@"), Some(digits));
        let CharacterNode::EditorialSymbol(page) = page else {
            panic!("expected an editorial symbol");
        };
        assert_eq!(page.value, Some(73));
        assert_eq!(page.number_text(), Some("073"));

        let line = Token::synthetic(TokenKind::Digit, "12").with_value(Some(12));
        let CharacterNode::EditorialSymbol(line) = editorial_symbol(line, None) else {
            panic!("expected an editorial symbol");
        };
        assert_eq!((line.value, line.number_text()), (Some(12), None));

        let overflow = Token::synthetic(TokenKind::Digit, "99999999999999999999");
        let CharacterNode::EditorialSymbol(bracket) =
            editorial_symbol(Token::synthetic(TokenKind::OpenBracket, "["), Some(overflow))
        else {
            panic!("expected an editorial symbol");
        };
        assert_eq!(bracket.value, None);
        assert_eq!(bracket.number_text(), Some("99999999999999999999"));

        assert_eq!(
            punctuation(Token::synthetic(TokenKind::Period, ".")).kind(),
            TokenKind::Period
        );
        assert_eq!(
            space(Token::synthetic(TokenKind::Newline, "\n")).kind(),
            TokenKind::Newline
        );
    }
}
