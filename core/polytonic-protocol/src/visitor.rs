//! Double dispatch over the closed set of character nodes.

use crate::character::{CharacterNode, Consonant, EditorialSymbol, Punctuation, Space, Vowel};

/// Where a letter sits inside its word. Needed to pick the positional
/// sigma when the source did not name a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPosition {
    Medial,
    Final,
}

impl WordPosition {
    /// A letter is word-final when no letter follows it.
    pub fn of(next: Option<&CharacterNode>) -> Self {
        match next {
            Some(node) if node.is_alphabetic() => WordPosition::Medial,
            _ => WordPosition::Final,
        }
    }
}

pub trait CharacterVisitor {
    type Error;

    fn visit_vowel(&mut self, vowel: &Vowel) -> Result<(), Self::Error>;

    fn visit_consonant(
        &mut self,
        consonant: &Consonant,
        position: WordPosition,
    ) -> Result<(), Self::Error>;

    fn visit_punctuation(&mut self, punctuation: &Punctuation) -> Result<(), Self::Error>;

    fn visit_editorial_symbol(&mut self, symbol: &EditorialSymbol) -> Result<(), Self::Error>;

    fn visit_space(&mut self, space: &Space) -> Result<(), Self::Error>;
}

/// Dispatch `node` to the matching visitor method. `next` is the node that
/// follows it in the AST, if any.
pub fn walk<V: CharacterVisitor + ?Sized>(
    visitor: &mut V,
    node: &CharacterNode,
    next: Option<&CharacterNode>,
) -> Result<(), V::Error> {
    match node {
        CharacterNode::Vowel(v) => visitor.visit_vowel(v),
        CharacterNode::Consonant(c) => visitor.visit_consonant(c, WordPosition::of(next)),
        CharacterNode::Punctuation(p) => visitor.visit_punctuation(p),
        CharacterNode::EditorialSymbol(e) => visitor.visit_editorial_symbol(e),
        CharacterNode::Space(s) => visitor.visit_space(s),
    }
}
