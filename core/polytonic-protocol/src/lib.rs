//! Shared vocabulary of the Polytonic converter: tokens, token kinds,
//! encodings and the character AST every parser produces and every
//! renderer consumes.

pub mod character;
pub mod encoding;
pub mod factory;
pub mod kind;
pub mod ranges;
pub mod token;
pub mod visitor;

// Re-export core types for convenience
pub use character::{
    Annotation, CharacterNode, Consonant, EditorialSymbol, Marks, Punctuation, SigmaForm, Space,
    Vowel,
};
pub use encoding::{Encoding, UnknownEncoding};
pub use factory::{ConsonantData, VowelData};
pub use kind::{TokenKind, UnknownKind};
pub use ranges::NumberRange;
pub use token::{Span, Token};
pub use visitor::{walk, CharacterVisitor, WordPosition};
