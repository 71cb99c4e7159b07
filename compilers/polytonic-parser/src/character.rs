//! Pieces shared by the three Greek character parsers.

use polytonic_protocol::{factory, CharacterNode, Token, TokenKind, VowelData};

use crate::parser::ParserState;

/// Token stream plus the source text it came from, so that syntax errors
/// can quote the offending line.
#[derive(Debug, Clone, Default)]
pub struct CharacterParserState {
    pub tokens: ParserState<Token>,
    pub text: String,
}

impl CharacterParserState {
    pub fn load(&mut self, text: &str, tokens: Vec<Token>) {
        self.tokens = ParserState::new(tokens);
        self.text = text.to_string();
    }

    /// Append a diagram pointing at the token under the cursor. Past the
    /// end it points at the last token, and at the start of the text when
    /// there are no tokens.
    pub fn make_error_msg(&self, msg: &str) -> String {
        let nodes = self.tokens.nodes();
        let position = self.tokens.position();
        let (line, column) = nodes
            .get(position)
            .or_else(|| nodes.last())
            .map(|t| (t.line, t.column))
            .unwrap_or((1, 1));
        let excerpt = self.text.split('\n').nth(line - 1).unwrap_or_default();
        let arrow = format!("{}^", "-".repeat(column - 1));
        format!(
            "{msg}: \n\tNear here (column {column} on line {line}):\n\t\t{excerpt}\n\t\t{arrow}"
        )
    }
}

/// Implement [`ParserBase`](crate::parser::ParserBase) for a Greek parser
/// holding a `CharacterParserState` in its `state` field. The parser
/// provides `parse_text(&mut self, &str)`.
macro_rules! impl_character_parser {
    ($parser:ty) => {
        impl $crate::parser::ParserBase for $parser {
            type Input = str;
            type Node = polytonic_protocol::Token;
            type Category = polytonic_protocol::TokenKind;
            type Output = Result<Vec<polytonic_protocol::CharacterNode>, $crate::error::ParseError>;

            fn state(&self) -> &$crate::parser::ParserState<polytonic_protocol::Token> {
                &self.state.tokens
            }

            fn state_mut(&mut self) -> &mut $crate::parser::ParserState<polytonic_protocol::Token> {
                &mut self.state.tokens
            }

            fn check(&self, category: polytonic_protocol::TokenKind) -> bool {
                $crate::parser::ParserBase::current(self).map_or(false, |t| t.kind == category)
            }

            fn make_error_msg(&self, msg: &str) -> String {
                self.state.make_error_msg(msg)
            }

            fn parse(&mut self, text: &str) -> Self::Output {
                self.parse_text(text)
            }
        }
    };
}

pub(crate) use impl_character_parser;

/// Drive `parse_element` over the whole token stream. A `None` element skips
/// one token so that every malformed element gets reported.
pub(crate) fn parse_elements<P>(
    parser: &mut P,
    mut parse_element: impl FnMut(&mut P) -> Option<CharacterNode>,
) -> Result<Vec<CharacterNode>, crate::error::ParseError>
where
    P: crate::parser::ParserBase<Node = Token, Category = TokenKind>,
{
    let mut characters = Vec::new();
    while !parser.is_at_end() {
        match parse_element(parser) {
            Some(node) => characters.push(node),
            None => {
                tracing::trace!(position = parser.state().position(), "resynchronizing");
                parser.advance();
            }
        }
    }
    if parser.had_error() {
        let errors = parser.state_mut().take_errors();
        tracing::debug!(errors = errors.len(), "parse rejected");
        return Err(crate::error::ParseError::Syntax(errors));
    }
    tracing::debug!(nodes = characters.len(), "parsed");
    Ok(characters)
}

/// The previously read token. Only called right after a successful match.
pub(crate) fn previous_token<P>(parser: &P) -> Option<Token>
where
    P: crate::parser::ParserBase<Node = Token>,
{
    parser.previous().cloned()
}

pub(crate) fn punctuation<P>(parser: &P) -> Option<CharacterNode>
where
    P: crate::parser::ParserBase<Node = Token>,
{
    previous_token(parser).map(factory::punctuation)
}

pub(crate) fn space<P>(parser: &P) -> Option<CharacterNode>
where
    P: crate::parser::ParserBase<Node = Token>,
{
    previous_token(parser).map(factory::space)
}

/// An editorial symbol, with a directly following number as its value.
pub(crate) fn editorial_symbol<P>(parser: &mut P) -> Option<CharacterNode>
where
    P: crate::parser::ParserBase<Node = Token, Category = TokenKind>,
{
    let symbol = previous_token(parser)?;
    let number = if parser.match_any(&[TokenKind::Digit]) {
        previous_token(parser)
    } else {
        None
    };
    Some(factory::editorial_symbol(symbol, number))
}

/// A number standing on its own, such as a line reference.
pub(crate) fn number<P>(parser: &P) -> Option<CharacterNode>
where
    P: crate::parser::ParserBase<Node = Token>,
{
    previous_token(parser).map(|digit| factory::editorial_symbol(digit, None))
}

/// Read one optional diacritic of the class picked out by `class`.
pub(crate) fn take_mark<P>(parser: &mut P, data: &mut VowelData, class: fn(TokenKind) -> bool)
where
    P: crate::parser::ParserBase<Node = Token, Category = TokenKind>,
{
    if match_where(parser, class) {
        if let Some(mark) = previous_token(parser) {
            // `class` only admits diacritics, which always have a slot.
            let _ = data.set_mark(mark);
        }
    }
}

/// Read a run of diacritics in any order; the last of each class wins.
pub(crate) fn take_mark_run<P>(parser: &mut P, data: &mut VowelData)
where
    P: crate::parser::ParserBase<Node = Token, Category = TokenKind>,
{
    while match_where(parser, TokenKind::is_diacritic) {
        if let Some(mark) = previous_token(parser) {
            let _ = data.set_mark(mark);
        }
    }
}

/// Advance past the current token if its kind satisfies `pred`.
pub(crate) fn match_where<P>(parser: &mut P, pred: impl Fn(TokenKind) -> bool) -> bool
where
    P: crate::parser::ParserBase<Node = Token, Category = TokenKind>,
{
    if parser.current().map_or(false, |t| pred(t.kind)) {
        parser.advance();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_diagram() {
        let mut state = CharacterParserState::default();
        state.load(
            "ab\ncd",
            vec![
                Token::new(TokenKind::Alpha, "a", 0, 1, 1, 1),
                Token::new(TokenKind::Beta, "b", 1, 2, 1, 2),
                Token::new(TokenKind::Newline, "\n", 2, 3, 1, 3),
                Token::new(TokenKind::Chi, "c", 3, 4, 2, 1),
                Token::new(TokenKind::Delta, "d", 4, 5, 2, 2),
            ],
        );
        assert_eq!(
            state.make_error_msg("Expected a vowel"),
            "Expected a vowel: \n\tNear here (column 1 on line 1):\n\t\tab\n\t\t^"
        );
    }

    #[test]
    fn test_error_diagram_without_tokens() {
        let mut state = CharacterParserState::default();
        state.load("", Vec::new());
        assert_eq!(
            state.make_error_msg("Expected a vowel"),
            "Expected a vowel: \n\tNear here (column 1 on line 1):\n\t\t\n\t\t^"
        );
    }
}
