use thiserror::Error;

use crate::lexer::UnexpectedCharacter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer could not tokenize the input.
    #[error(transparent)]
    Lexical(#[from] UnexpectedCharacter),

    /// Every malformed element the parser ran into, in source order.
    #[error("{} syntax error(s):\n{}", .0.len(), .0.join("\n"))]
    Syntax(Vec<String>),
}

impl ParseError {
    pub fn messages(&self) -> Vec<String> {
        match self {
            ParseError::Lexical(e) => vec![e.to_string()],
            ParseError::Syntax(messages) => messages.clone(),
        }
    }
}
