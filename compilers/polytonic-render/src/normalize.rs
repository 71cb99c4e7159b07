//! Strip diacritics a vowel cannot legally carry.
//!
//! The parsers accept whatever marks the source put on a letter. Before the
//! AST is written as Unicode, marks that no precomposed glyph (and no Greek
//! orthography) allows are dropped:
//! - diaeresis except on iota and upsilon
//! - iota subscript except on alpha, eta and omega
//! - circumflex on epsilon and omicron
//! - smooth breathing on a capital upsilon

use polytonic_protocol::{CharacterNode, TokenKind, Vowel};
use tracing::trace;

pub fn normalize(node: &CharacterNode) -> CharacterNode {
    match node {
        CharacterNode::Vowel(vowel) => CharacterNode::Vowel(normalize_vowel(vowel)),
        other => other.clone(),
    }
}

pub fn normalize_all(nodes: &[CharacterNode]) -> Vec<CharacterNode> {
    nodes.iter().map(normalize).collect()
}

fn normalize_vowel(vowel: &Vowel) -> Vowel {
    let mut vowel = vowel.clone();
    let kind = vowel.kind();

    let illegal_modifier = match vowel.modifier_kind() {
        Some(TokenKind::Diaeresis) => !matches!(kind, TokenKind::Iota | TokenKind::Upsilon),
        Some(TokenKind::Subscript) => {
            !matches!(kind, TokenKind::Alpha | TokenKind::Eta | TokenKind::Omega)
        }
        _ => false,
    };
    if illegal_modifier {
        trace!(%kind, line = vowel.name.line, column = vowel.name.column, "dropping modifier");
        vowel.modifier = None;
    }

    if vowel.accent_kind() == Some(TokenKind::Circumflex)
        && matches!(kind, TokenKind::Epsilon | TokenKind::Omicron)
    {
        trace!(%kind, line = vowel.name.line, column = vowel.name.column, "dropping circumflex");
        vowel.accent = None;
    }

    if vowel.is_uppercase
        && kind == TokenKind::Upsilon
        && vowel.breathing_kind() == Some(TokenKind::Smooth)
    {
        trace!(line = vowel.name.line, column = vowel.name.column, "dropping smooth breathing");
        vowel.breathing = None;
    }
    vowel
}

#[cfg(test)]
mod tests {
    use super::*;
    use polytonic_protocol::{factory, Token, VowelData};
    use rstest::rstest;

    fn vowel(kind: TokenKind, marks: &[TokenKind], uppercase: bool) -> CharacterNode {
        let mut data = VowelData::new(Token::synthetic(kind, "x")).uppercase(uppercase);
        for mark in marks {
            data.set_mark(Token::synthetic(*mark, "m")).unwrap();
        }
        factory::vowel(data)
    }

    fn marks(node: &CharacterNode) -> Vec<TokenKind> {
        let v = node.as_vowel().unwrap();
        [v.breathing_kind(), v.accent_kind(), v.modifier_kind()]
            .into_iter()
            .flatten()
            .collect()
    }

    #[rstest]
    #[case(TokenKind::Iota, TokenKind::Diaeresis, true)]
    #[case(TokenKind::Upsilon, TokenKind::Diaeresis, true)]
    #[case(TokenKind::Alpha, TokenKind::Diaeresis, false)]
    #[case(TokenKind::Omega, TokenKind::Diaeresis, false)]
    #[case(TokenKind::Alpha, TokenKind::Subscript, true)]
    #[case(TokenKind::Eta, TokenKind::Subscript, true)]
    #[case(TokenKind::Omega, TokenKind::Subscript, true)]
    #[case(TokenKind::Omicron, TokenKind::Subscript, false)]
    #[case(TokenKind::Iota, TokenKind::Subscript, false)]
    #[case(TokenKind::Epsilon, TokenKind::Circumflex, false)]
    #[case(TokenKind::Omicron, TokenKind::Circumflex, false)]
    #[case(TokenKind::Omega, TokenKind::Circumflex, true)]
    #[case(TokenKind::Epsilon, TokenKind::Acute, true)]
    fn test_single_mark(#[case] kind: TokenKind, #[case] mark: TokenKind, #[case] kept: bool) {
        let node = normalize(&vowel(kind, &[mark], false));
        assert_eq!(marks(&node) == vec![mark], kept, "{kind} + {mark}");
    }

    #[test]
    fn test_capital_upsilon_breathing() {
        let smooth = normalize(&vowel(TokenKind::Upsilon, &[TokenKind::Smooth, TokenKind::Acute], true));
        assert_eq!(marks(&smooth), vec![TokenKind::Acute]);

        let rough = normalize(&vowel(TokenKind::Upsilon, &[TokenKind::Rough], true));
        assert_eq!(marks(&rough), vec![TokenKind::Rough]);

        let small = normalize(&vowel(TokenKind::Upsilon, &[TokenKind::Smooth], false));
        assert_eq!(marks(&small), vec![TokenKind::Smooth]);
    }

    #[test]
    fn test_other_marks_survive() {
        let node = vowel(TokenKind::Omicron, &[TokenKind::Rough, TokenKind::Circumflex, TokenKind::Diaeresis], false);
        assert_eq!(marks(&normalize(&node)), vec![TokenKind::Rough]);

        let space = factory::space(Token::synthetic(TokenKind::Whitespace, " "));
        assert_eq!(normalize(&space), space);
    }

    #[test]
    fn test_is_idempotent() {
        let nodes = vec![
            vowel(TokenKind::Epsilon, &[TokenKind::Circumflex, TokenKind::Subscript], false),
            vowel(TokenKind::Upsilon, &[TokenKind::Smooth, TokenKind::Diaeresis], true),
        ];
        let once = normalize_all(&nodes);
        assert_eq!(normalize_all(&once), once);
    }
}
