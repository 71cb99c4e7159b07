//! A rule-table lexer.
//!
//! Rules are tried at every position of the source text; the longest match
//! wins and ties go to the rule registered first. Nothing is skipped
//! implicitly: whitespace needs its own rule and can be dropped afterwards
//! with the `exclude` list of [`Lexer::tokenize`].

use std::fmt;

use polytonic_protocol::Token;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Computes a token's `value` from its lexeme.
pub type Callback = fn(&str) -> Option<i64>;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern {pattern:?} for rule {kind}: {source}")]
    InvalidPattern {
        kind: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

fn caret(column: &usize) -> String {
    format!("{}^", "-".repeat(column.saturating_sub(1)))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Lexer encountered an unexpected character at column {column} on line {line}:\n\tNear here:\n\t\t{excerpt}\n\t\t{}",
    caret(.column)
)]
pub struct UnexpectedCharacter {
    /// The full source line holding the offending character.
    pub excerpt: String,
    pub line: usize,
    pub column: usize,
}

impl UnexpectedCharacter {
    fn at(text: &str, line: usize, column: usize) -> Self {
        let excerpt = text.split('\n').nth(line - 1).unwrap_or_default();
        Self {
            excerpt: excerpt.to_string(),
            line,
            column,
        }
    }
}

struct Rule<K> {
    kind: K,
    pattern: Regex,
    callback: Option<Callback>,
}

pub struct Lexer<K> {
    rules: Vec<Rule<K>>,
}

impl<K: Copy + Eq + fmt::Display> Lexer<K> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule. The pattern is anchored at the current position.
    pub fn add_rule(self, kind: K, pattern: &str) -> Result<Self, RuleError> {
        self.push_rule(kind, pattern, None)
    }

    /// Register a rule whose tokens carry a value computed from the lexeme.
    pub fn add_rule_with(self, kind: K, pattern: &str, callback: Callback) -> Result<Self, RuleError> {
        self.push_rule(kind, pattern, Some(callback))
    }

    fn push_rule(mut self, kind: K, pattern: &str, callback: Option<Callback>) -> Result<Self, RuleError> {
        let anchored = Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
            RuleError::InvalidPattern {
                kind: kind.to_string(),
                pattern: pattern.to_string(),
                source,
            }
        })?;
        self.rules.push(Rule {
            kind,
            pattern: anchored,
            callback,
        });
        Ok(self)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Split `text` into tokens, then drop every token whose kind is listed
    /// in `exclude`.
    pub fn tokenize(&self, text: &str, exclude: &[K]) -> Result<Vec<Token<K>>, UnexpectedCharacter> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut line = 1;
        let mut column = 1;

        while start < text.len() {
            let rest = &text[start..];
            let mut best: Option<Token<K>> = None;
            for rule in &self.rules {
                if let Some(token) = Self::try_rule(rule, rest, start, line, column) {
                    best = Some(match best {
                        None => token,
                        Some(current) => Self::best(current, token),
                    });
                }
            }
            let Some(token) = best else {
                debug!(line, column, "no rule matched");
                return Err(UnexpectedCharacter::at(text, line, column));
            };

            for ch in token.lexeme.chars() {
                if ch == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }
            start = token.span.end;
            tokens.push(token);
        }

        let total = tokens.len();
        tokens.retain(|t| !exclude.contains(&t.kind));
        debug!(total, kept = tokens.len(), "tokenized");
        Ok(tokens)
    }

    fn try_rule(rule: &Rule<K>, rest: &str, start: usize, line: usize, column: usize) -> Option<Token<K>> {
        let found = rule.pattern.find(rest)?;
        // Zero-length matches would never advance the cursor.
        if found.end() == 0 {
            return None;
        }
        let lexeme = found.as_str();
        let value = rule.callback.and_then(|callback| callback(lexeme));
        Some(Token::new(rule.kind, lexeme, start, start + found.end(), line, column).with_value(value))
    }

    /// Pick the preferred of two candidate matches: the longer lexeme, or
    /// `best` itself on a tie.
    pub fn best(best: Token<K>, other: Token<K>) -> Token<K> {
        if best.len() >= other.len() {
            best
        } else {
            other
        }
    }
}

impl<K: Copy + Eq + fmt::Display> Default for Lexer<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Value callback for runs of ASCII digits.
pub fn integer_value(lexeme: &str) -> Option<i64> {
    lexeme.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word_lexer() -> Lexer<&'static str> {
        Lexer::new()
            .add_rule("WORD", "[a-z]+")
            .unwrap()
            .add_rule_with("NUMBER", r"\d+", integer_value)
            .unwrap()
            .add_rule("SPACE", " ")
            .unwrap()
            .add_rule("NEWLINE", "\n")
            .unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(word_lexer().tokenize("", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_longest_match_and_values() {
        let lexer = Lexer::new()
            .add_rule("A", "a")
            .unwrap()
            .add_rule("AA", "aa")
            .unwrap()
            .add_rule_with("NUMBER", r"\d+", integer_value)
            .unwrap();
        let tokens = lexer.tokenize("aaa42", &[]).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec!["AA", "A", "NUMBER"]);
        assert_eq!(tokens[2].lexeme, "42");
        assert_eq!(tokens[2].value, Some(42));
        assert_eq!(tokens[2].span, polytonic_protocol::Span::new(3, 5));
    }

    #[test]
    fn test_tie_keeps_first_rule() {
        let lexer = Lexer::new()
            .add_rule("FIRST", "x")
            .unwrap()
            .add_rule("SECOND", "x")
            .unwrap();
        assert_eq!(lexer.tokenize("x", &[]).unwrap()[0].kind, "FIRST");
    }

    #[test]
    fn test_line_and_column_tracking() {
        let tokens = word_lexer().tokenize("ab cd\nef", &[]).unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| (t.lexeme.as_str(), t.line, t.column)).collect();
        assert_eq!(
            positions,
            vec![
                ("ab", 1, 1),
                (" ", 1, 3),
                ("cd", 1, 4),
                ("\n", 1, 6),
                ("ef", 2, 1),
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let lexer = Lexer::new().add_rule("LOWER", "[a-z]").unwrap();
        let err = lexer.tokenize("a1b", &[]).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 2);
        assert_eq!(err.excerpt, "a1b");
        assert!(err.to_string().ends_with("a1b\n\t\t-^"));
    }

    #[test]
    fn test_error_on_second_line() {
        let err = word_lexer().tokenize("ab\ncd!", &[]).unwrap_err();
        assert_eq!((err.line, err.column), (2, 3));
        assert_eq!(err.excerpt, "cd!");
    }

    #[test]
    fn test_zero_length_match_is_ignored() {
        let lexer = Lexer::new()
            .add_rule("MAYBE", "b*")
            .unwrap()
            .add_rule("A", "a")
            .unwrap();
        let tokens = lexer.tokenize("abba", &[]).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec!["A", "MAYBE", "A"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = Lexer::new().add_rule("BROKEN", "(");
        assert!(matches!(result, Err(RuleError::InvalidPattern { .. })));
    }

    #[test]
    fn test_best() {
        let short = Token::new("A", "a", 0, 1, 1, 1);
        let long = Token::new("B", "ab", 0, 2, 1, 1);
        let tie = Token::new("C", "c", 0, 1, 1, 1);
        assert_eq!(Lexer::best(short.clone(), long.clone()).kind, "B");
        assert_eq!(Lexer::best(long, short.clone()).kind, "B");
        assert_eq!(Lexer::best(short, tie).kind, "A");
    }

    proptest! {
        #[test]
        fn test_filter_is_idempotent(text in "[a-z0-9 \n]{0,40}") {
            let lexer = word_lexer();
            let all = lexer.tokenize(&text, &[]).unwrap();
            let unfiltered: Vec<_> = all.iter().map(|t| t.kind).collect();

            let filtered = lexer.tokenize(&text, &["SPACE", "NEWLINE"]).unwrap();
            let expected: Vec<_> = unfiltered
                .iter()
                .copied()
                .filter(|k| *k != "SPACE" && *k != "NEWLINE")
                .collect();
            prop_assert_eq!(filtered.iter().map(|t| t.kind).collect::<Vec<_>>(), expected);

            let joined: String = all.iter().map(|t| t.lexeme.as_str()).collect();
            prop_assert_eq!(joined, text);
        }

        #[test]
        fn test_best_prefers_longer(a in 1usize..10, b in 1usize..10) {
            let first = Token::new("FIRST", "x".repeat(a), 0, a, 1, 1);
            let second = Token::new("SECOND", "y".repeat(b), 0, b, 1, 1);
            let winner = Lexer::best(first, second);
            prop_assert_eq!(winner.kind, if a >= b { "FIRST" } else { "SECOND" });
        }
    }
}
