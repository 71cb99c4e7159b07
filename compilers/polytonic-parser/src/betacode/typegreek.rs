//! Keyboard beta code as typed into TypeGreek.
//!
//! Letter case carries capitalization and diacritics always follow the
//! letter, in any order.

use once_cell::sync::Lazy;
use polytonic_protocol::{factory, CharacterNode, ConsonantData, TokenKind, VowelData};

use crate::character::{
    impl_character_parser, match_where, parse_elements, previous_token, punctuation, space,
    take_mark_run, CharacterParserState,
};
use crate::error::ParseError;
use crate::lexer::{Lexer, RuleError};
use crate::parser::ParserBase;
use crate::syntax::is_upper;

const RULES: &[(TokenKind, &str)] = &[
    // Alphabetic
    (TokenKind::Alpha, "[aA]"),
    (TokenKind::Beta, "[bB]"),
    (TokenKind::Gamma, "[gG]"),
    (TokenKind::Delta, "[dD]"),
    (TokenKind::Epsilon, "[eE]"),
    (TokenKind::Zeta, "[zZ]"),
    (TokenKind::Eta, "[hH]"),
    (TokenKind::Theta, "[qQ]"),
    (TokenKind::Iota, "[iI]"),
    (TokenKind::Kappa, "[kK]"),
    (TokenKind::Lambda, "[lL]"),
    (TokenKind::Mu, "[mM]"),
    (TokenKind::Nu, "[nN]"),
    (TokenKind::Xi, "[cC]"),
    (TokenKind::Omicron, "[oO]"),
    (TokenKind::Pi, "[pP]"),
    (TokenKind::Rho, "[rR]"),
    (TokenKind::Sigma, "[sS]"),
    (TokenKind::Tau, "[tT]"),
    (TokenKind::Upsilon, "[uU]"),
    (TokenKind::Phi, "[fF]"),
    (TokenKind::Chi, "[xX]"),
    (TokenKind::Psi, "[yY]"),
    (TokenKind::Omega, "[wW]"),
    (TokenKind::Digamma, "[vV]"),
    // Accents
    (TokenKind::Acute, "/"),
    (TokenKind::Grave, r"\\"),
    (TokenKind::Circumflex, "="),
    // Modifiers
    (TokenKind::Diaeresis, r"\+"),
    (TokenKind::Subscript, r"\|"),
    // Breathings
    (TokenKind::Rough, r"\("),
    (TokenKind::Smooth, r"\)"),
    // Punctuation
    (TokenKind::Underdot, "@"),
    (TokenKind::Period, r"\."),
    (TokenKind::Comma, ","),
    (TokenKind::Middledot, "[:;]"),
    (TokenKind::Question, r"\?"),
    (TokenKind::Apostrophe, "'"),
    // Misc.
    (TokenKind::Whitespace, " "),
    (TokenKind::Tab, r"\t"),
    (TokenKind::Newline, r"\n"),
];

fn build_lexer() -> Result<Lexer<TokenKind>, RuleError> {
    RULES
        .iter()
        .try_fold(Lexer::new(), |lexer, (kind, pattern)| lexer.add_rule(*kind, pattern))
}

pub static TYPEGREEK_BETACODE_LEXER: Lazy<Lexer<TokenKind>> =
    Lazy::new(|| build_lexer().expect("TypeGreek beta code rules compile"));

/// Parses TypeGreek beta code into the character AST.
#[derive(Debug, Clone, Default)]
pub struct TypeGreekBetacodeParser {
    state: CharacterParserState,
}

impl_character_parser!(TypeGreekBetacodeParser);

impl TypeGreekBetacodeParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_text(&mut self, text: &str) -> Result<Vec<CharacterNode>, ParseError> {
        self.reset();
        let tokens = TYPEGREEK_BETACODE_LEXER.tokenize(text, &[])?;
        self.state.load(text, tokens);
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
        if match_where(self, TokenKind::is_space) {
            return space(self);
        }
        // A diacritic or underdot with no letter to sit on.
        self.consume(TokenKind::Alpha, "Expected a vowel");
        None
    }

    fn parse_consonant(&mut self) -> Option<CharacterNode> {
        let name = previous_token(self)?;
        let is_uppercase = is_upper(&name.lexeme);
        let mut data = ConsonantData::new(name).uppercase(is_uppercase);

        if data.name.kind == TokenKind::Rho && match_where(self, TokenKind::is_breathing) {
            data.annotation.breathing = previous_token(self);
        }
        data.has_underdot = self.match_any(&[TokenKind::Underdot]);
        Some(factory::consonant(data))
    }

    fn parse_vowel(&mut self) -> Option<CharacterNode> {
        let name = previous_token(self)?;
        let is_uppercase = is_upper(&name.lexeme);
        let mut data = VowelData::new(name).uppercase(is_uppercase);

        data.has_underdot = self.match_any(&[TokenKind::Underdot]);
        take_mark_run(self, &mut data);
        if self.match_any(&[TokenKind::Underdot]) {
            data.has_underdot = true;
        }
        Some(factory::vowel(data))
    }
}
