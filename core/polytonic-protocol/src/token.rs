use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::kind::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One lexeme match produced by a lexer.
///
/// `line` and `column` are 1-based and point at the first character of the
/// lexeme. `value` is filled in by a rule callback, e.g. the integer value
/// of a run of digits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token<K = TokenKind> {
    pub kind: K,
    pub lexeme: String,
    pub span: Span,
    pub line: usize,
    pub column: usize,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<i64>,
}

impl<K> Token<K> {
    pub fn new(
        kind: K,
        lexeme: impl Into<String>,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span: Span::new(start, end),
            line,
            column,
            value: None,
        }
    }

    pub fn with_value(mut self, value: Option<i64>) -> Self {
        self.value = value;
        self
    }

    /// Length of the lexeme in bytes of the source text.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl Token<TokenKind> {
    /// A token that did not come from source text. Used by tests and by
    /// callers that assemble nodes by hand.
    pub fn synthetic(kind: TokenKind, lexeme: &str) -> Self {
        Self::new(kind, lexeme, 0, lexeme.len(), 1, 1)
    }
}

impl<K: fmt::Display> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {}, {}[{}])",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_properties() {
        let token = Token::new("IDENTIFIER", "hello", 0, 5, 1, 1);

        assert_eq!(token.kind, "IDENTIFIER");
        assert_eq!(token.lexeme, "hello");
        assert_eq!(token.span, Span::new(0, 5));
        assert_eq!(token.len(), 5);
        assert_eq!(token.value, None);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("IDENTIFIER", "hello", 0, 5, 1, 1);
        assert_eq!(token.to_string(), "Token(IDENTIFIER, hello, 1[1])");

        let alpha = Token::new(TokenKind::Alpha, "a", 3, 4, 2, 7);
        assert_eq!(alpha.to_string(), "Token(alpha, a, 2[7])");
    }
}
