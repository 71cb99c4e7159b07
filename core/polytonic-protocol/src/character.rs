//! The character AST: one node per rendered Greek character position.

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::kind::TokenKind;
use crate::token::Token;

bitflags! {
    /// Which diacritic classes a vowel carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct Marks: u8 {
        const ACCENT = 1;
        const BREATHING = 2;
        const MODIFIER = 4;
        const LENGTH = 8;
    }
}

/// Typographic form of a sigma, as numbered by TLG beta code (`S1`, `S2`, `S3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SigmaForm {
    Medial = 1,
    Final = 2,
    Lunate = 3,
}

impl SigmaForm {
    pub fn from_digit(digit: i64) -> Option<Self> {
        match digit {
            1 => Some(SigmaForm::Medial),
            2 => Some(SigmaForm::Final),
            3 => Some(SigmaForm::Lunate),
            _ => None,
        }
    }

    pub fn digit(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Vowel {
    pub name: Token,
    pub accent: Option<Token>,
    pub breathing: Option<Token>,
    pub modifier: Option<Token>,
    pub length_mark: Option<Token>,
    pub is_uppercase: bool,
    pub has_underdot: bool,
}

impl Vowel {
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

    pub fn kind(&self) -> TokenKind {
        self.name.kind
    }

    pub fn accent_kind(&self) -> Option<TokenKind> {
        self.accent.as_ref().map(|t| t.kind)
    }

    pub fn breathing_kind(&self) -> Option<TokenKind> {
        self.breathing.as_ref().map(|t| t.kind)
    }

    pub fn modifier_kind(&self) -> Option<TokenKind> {
        self.modifier.as_ref().map(|t| t.kind)
    }

    pub fn length_kind(&self) -> Option<TokenKind> {
        self.length_mark.as_ref().map(|t| t.kind)
    }

    pub fn marks(&self) -> Marks {
        let mut marks = Marks::empty();
        marks.set(Marks::ACCENT, self.accent.is_some());
        marks.set(Marks::BREATHING, self.breathing.is_some());
        marks.set(Marks::MODIFIER, self.modifier.is_some());
        marks.set(Marks::LENGTH, self.length_mark.is_some());
        marks
    }

    pub fn has_diaeresis(&self) -> bool {
        self.modifier_kind() == Some(TokenKind::Diaeresis)
    }

    /// True when no accent, breathing or modifier is present. Length marks
    /// do not count: they describe quantity, not a diacritic that blocks
    /// a diphthong.
    pub fn is_bare(&self) -> bool {
        !self
            .marks()
            .intersects(Marks::ACCENT | Marks::BREATHING | Marks::MODIFIER)
    }

    /// Whether this vowel may open a diphthong.
    pub fn can_begin_diphthong(&self) -> bool {
        self.is_bare() && self.kind() != TokenKind::Iota
    }

    /// Whether this vowel may close a diphthong.
    pub fn can_end_diphthong(&self) -> bool {
        if self.has_diaeresis() {
            return false;
        }
        !matches!(
            self.kind(),
            TokenKind::Alpha
                | TokenKind::Omicron
                | TokenKind::Omega
                | TokenKind::Eta
                | TokenKind::Epsilon
        )
    }

    /// Check whether this vowel forms a diphthong with `other`, the vowel
    /// that follows it.
    ///
    /// Adscript (ηι, ωι) and the crasis ωυ are attested outside the regular
    /// inventory and are decided before the general begin/end rule.
    pub fn can_form_diphthong(&self, other: &Vowel) -> bool {
        let accent_or_modifier = Marks::ACCENT | Marks::MODIFIER;
        match (self.kind(), other.kind()) {
            (TokenKind::Eta, TokenKind::Iota) => other.is_bare() && self.modifier.is_none(),
            (TokenKind::Omega, TokenKind::Iota) => other.is_bare(),
            (TokenKind::Omega, TokenKind::Upsilon) => {
                !self.marks().intersects(accent_or_modifier)
                    && !other.marks().intersects(accent_or_modifier)
            }
            (TokenKind::Upsilon, TokenKind::Upsilon) => false,
            _ => self.can_begin_diphthong() && other.can_end_diphthong(),
        }
    }
}

/// Data that has no direct glyph of its own: a rho's breathing or the
/// digit selecting a sigma's form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Annotation {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub breathing: Option<Token>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub digit: Option<Token>,
}

impl Annotation {
    pub fn is_empty(&self) -> bool {
        self.breathing.is_none() && self.digit.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Consonant {
    pub name: Token,
    pub is_uppercase: bool,
    pub has_underdot: bool,
    pub annotation: Annotation,
}

impl Consonant {
    pub fn new(name: Token) -> Self {
        Self {
            name,
            is_uppercase: false,
            has_underdot: false,
            annotation: Annotation::default(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.name.kind
    }

    pub fn breathing_kind(&self) -> Option<TokenKind> {
        self.annotation.breathing.as_ref().map(|t| t.kind)
    }

    /// The explicitly requested form of a sigma. An explicit digit wins over
    /// a form carried by the letter itself (lunate code points).
    pub fn sigma_form(&self) -> Option<SigmaForm> {
        if self.kind() != TokenKind::Sigma {
            return None;
        }
        self.annotation
            .digit
            .as_ref()
            .and_then(|d| d.value)
            .or(self.name.value)
            .and_then(SigmaForm::from_digit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Punctuation {
    pub punctuation_type: Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EditorialSymbol {
    pub symbol_type: Token,
    /// The digit run written right after the sigil, kept as written.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub number: Option<Token>,
    /// Integer value of the number, or of the symbol itself when it is a
    /// standalone digit run. `None` when the digits overflow.
    pub value: Option<i64>,
}

impl EditorialSymbol {
    /// The digits following the sigil as they appeared in the source.
    pub fn number_text(&self) -> Option<&str> {
        self.number.as_ref().map(|t| t.lexeme.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Space {
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "node", rename_all = "snake_case"))]
pub enum CharacterNode {
    Vowel(Vowel),
    Consonant(Consonant),
    Punctuation(Punctuation),
    EditorialSymbol(EditorialSymbol),
    Space(Space),
}

impl CharacterNode {
    pub fn is_alphabetic(&self) -> bool {
        matches!(self, CharacterNode::Vowel(_) | CharacterNode::Consonant(_))
    }

    pub fn as_vowel(&self) -> Option<&Vowel> {
        match self {
            CharacterNode::Vowel(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_consonant(&self) -> Option<&Consonant> {
        match self {
            CharacterNode::Consonant(c) => Some(c),
            _ => None,
        }
    }

    /// The token naming this node: the letter, the punctuation mark, the
    /// editorial symbol or the whitespace character.
    pub fn token(&self) -> &Token {
        match self {
            CharacterNode::Vowel(v) => &v.name,
            CharacterNode::Consonant(c) => &c.name,
            CharacterNode::Punctuation(p) => &p.punctuation_type,
            CharacterNode::EditorialSymbol(e) => &e.symbol_type,
            CharacterNode::Space(s) => &s.token,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.token().kind
    }
}

impl From<Vowel> for CharacterNode {
    fn from(v: Vowel) -> Self {
        CharacterNode::Vowel(v)
    }
}

impl From<Consonant> for CharacterNode {
    fn from(c: Consonant) -> Self {
        CharacterNode::Consonant(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token::synthetic(kind, lexeme)
    }

    fn vowel(code: &str) -> Vowel {
        // "a" plain alpha, "a/" acute alpha, "i+" diaeresis iota, "h(" rough eta ...
        let mut chars = code.chars();
        let letter = chars.next().expect("beta code starts with a letter");
        let kind = match letter {
            'a' => TokenKind::Alpha,
            'e' => TokenKind::Epsilon,
            'h' => TokenKind::Eta,
            'i' => TokenKind::Iota,
            'o' => TokenKind::Omicron,
            'u' => TokenKind::Upsilon,
            'w' => TokenKind::Omega,
            other => panic!("not a vowel: {other}"),
        };
        let mut v = Vowel::new(tok(kind, &letter.to_string()));
        for mark in chars {
            let s = mark.to_string();
            match mark {
                '/' => v.accent = Some(tok(TokenKind::Acute, &s)),
                '\\' => v.accent = Some(tok(TokenKind::Grave, &s)),
                '=' => v.accent = Some(tok(TokenKind::Circumflex, &s)),
                '(' => v.breathing = Some(tok(TokenKind::Rough, &s)),
                ')' => v.breathing = Some(tok(TokenKind::Smooth, &s)),
                '+' => v.modifier = Some(tok(TokenKind::Diaeresis, &s)),
                '|' => v.modifier = Some(tok(TokenKind::Subscript, &s)),
                other => panic!("not a mark: {other}"),
            }
        }
        v
    }

    #[rstest]
    // Unmarked followed by unmarked
    #[case("a", "i", true)]
    #[case("e", "i", true)]
    #[case("h", "i", true)]
    #[case("u", "i", true)]
    #[case("o", "i", true)]
    #[case("a", "u", true)]
    #[case("e", "u", true)]
    #[case("h", "u", true)]
    #[case("o", "u", true)]
    #[case("w", "i", true)]
    #[case("w", "u", true)]
    #[case("a", "w", false)]
    #[case("a", "e", false)]
    #[case("h", "a", false)]
    #[case("i", "o", false)]
    #[case("i", "i", false)]
    #[case("u", "u", false)]
    #[case("a", "a", false)]
    #[case("h", "h", false)]
    #[case("e", "e", false)]
    #[case("w", "w", false)]
    // Marked followed by unmarked
    #[case("h/", "i", true)]
    #[case("h=", "i", true)]
    #[case("h(", "i", true)]
    #[case("w/", "i", true)]
    #[case("w=", "i", true)]
    #[case("w(", "i", true)]
    #[case("w(", "u", true)]
    #[case("h|", "i", false)]
    #[case("a/", "i", false)]
    #[case("a=", "i", false)]
    #[case("o/", "i", false)]
    #[case("o(", "i", false)]
    #[case("e/", "i", false)]
    #[case("e(", "i", false)]
    #[case("u/", "i", false)]
    #[case("u=", "i", false)]
    #[case("u(", "i", false)]
    #[case("i/", "i", false)]
    #[case("i=", "i", false)]
    #[case("i(", "i", false)]
    #[case("w/", "u", false)]
    // Unmarked followed by marked
    #[case("a", "i/", true)]
    #[case("e", "i/", true)]
    #[case("u", "i/", true)]
    #[case("a", "u/", true)]
    #[case("e", "u/", true)]
    #[case("h", "u/", true)]
    #[case("w", "i/", false)]
    #[case("w", "i(", false)]
    #[case("h", "i/", false)]
    #[case("w", "u/", false)]
    #[case("i", "i/", false)]
    #[case("a", "i+", false)]
    #[case("u", "u/", false)]
    fn test_can_form_diphthong(#[case] first: &str, #[case] second: &str, #[case] expected: bool) {
        assert_eq!(
            vowel(first).can_form_diphthong(&vowel(second)),
            expected,
            "{first} + {second}"
        );
    }

    #[test]
    fn test_begin_and_end_predicates() {
        assert!(vowel("a").can_begin_diphthong());
        assert!(vowel("w").can_begin_diphthong());
        assert!(!vowel("i").can_begin_diphthong());
        assert!(!vowel("a/").can_begin_diphthong());
        assert!(!vowel("a(").can_begin_diphthong());

        assert!(vowel("i").can_end_diphthong());
        assert!(vowel("u/").can_end_diphthong());
        assert!(!vowel("u+").can_end_diphthong());
        for v in ["a", "e", "h", "o", "w"] {
            assert!(!vowel(v).can_end_diphthong(), "{v}");
        }
    }

    #[test]
    fn test_marks() {
        let v = vowel("a)/|");
        assert_eq!(v.marks(), Marks::ACCENT | Marks::BREATHING | Marks::MODIFIER);
        assert!(!v.is_bare());

        let mut long = vowel("a");
        long.length_mark = Some(tok(TokenKind::Macron, "%27"));
        assert_eq!(long.marks(), Marks::LENGTH);
        assert!(long.is_bare());
    }

    #[test]
    fn test_sigma_form() {
        let mut sigma = Consonant::new(tok(TokenKind::Sigma, "s"));
        assert_eq!(sigma.sigma_form(), None);

        sigma.annotation.digit = Some(tok(TokenKind::Digit, "2").with_value(Some(2)));
        assert_eq!(sigma.sigma_form(), Some(SigmaForm::Final));

        let lunate = Consonant::new(tok(TokenKind::Sigma, "ϲ").with_value(Some(3)));
        assert_eq!(lunate.sigma_form(), Some(SigmaForm::Lunate));

        let mut tau = Consonant::new(tok(TokenKind::Tau, "t"));
        tau.annotation.digit = Some(tok(TokenKind::Digit, "3").with_value(Some(3)));
        assert_eq!(tau.sigma_form(), None);
    }

    proptest! {
        #[test]
        fn test_diaeresis_never_closes_a_diphthong(
            first in "[aehiouw][/=(]?",
            second in "[iu][/=()]?",
        ) {
            let mut second = vowel(&second);
            second.modifier = Some(tok(TokenKind::Diaeresis, "+"));
            prop_assert!(!vowel(&first).can_form_diphthong(&second));
        }
    }
}
