//! Strict beta code as used by the Thesaurus Linguae Graecae.
//!
//! Capitals are marked with a leading `*`; the letters themselves are case
//! insensitive. Diacritics of a capital precede the letter (`*)/A`), those
//! of a small letter follow it (`A)/`).

use once_cell::sync::Lazy;
use polytonic_protocol::{factory, Annotation, CharacterNode, ConsonantData, TokenKind, VowelData};

use crate::character::{
    editorial_symbol, impl_character_parser, match_where, number, parse_elements,
    previous_token, punctuation, space, take_mark, CharacterParserState,
};
use crate::error::ParseError;
use crate::lexer::{integer_value, Lexer, RuleError};
use crate::parser::ParserBase;

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
    (TokenKind::Uppercase, r"\*"),
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
    // Quantity, longer than the bare `%`
    (TokenKind::Breve, "%26"),
    (TokenKind::Macron, "%27"),
    // Punctuation
    (TokenKind::Underdot, r"\?"),
    (TokenKind::Period, r"\."),
    (TokenKind::Comma, ","),
    (TokenKind::Middledot, ":"),
    (TokenKind::Question, ";"),
    (TokenKind::Apostrophe, "'"),
    (TokenKind::Emdash, "_"),
    (TokenKind::Endash, "-"),
    (TokenKind::MissingLetter, "!"),
    // Editorial and control symbols
    (TokenKind::OpenBracket, r"\["),
    (TokenKind::CloseBracket, r"\]"),
    (TokenKind::PageFormatting, "@"),
    (TokenKind::AdditionalPunctuation, "%"),
    (TokenKind::AdditionalCharacter, "#"),
    (TokenKind::OpenTextFormatting, "<"),
    (TokenKind::CloseTextFormatting, ">"),
    (TokenKind::QuotationMark, "\""),
    (TokenKind::Markup, r"\{"),
    (TokenKind::CloseMarkup, r"\}"),
    (TokenKind::Citation, "~"),
    (TokenKind::GreekStyle, r"\$"),
    (TokenKind::LatinStyle, "&"),
    // Misc.
    (TokenKind::Whitespace, " "),
    (TokenKind::Tab, r"\t"),
    (TokenKind::Newline, r"\n"),
];

fn build_lexer() -> Result<Lexer<TokenKind>, RuleError> {
    RULES
        .iter()
        .try_fold(Lexer::new(), |lexer, (kind, pattern)| lexer.add_rule(*kind, pattern))?
        .add_rule_with(TokenKind::Digit, "[0-9]+", integer_value)
}

pub static TLG_BETACODE_LEXER: Lazy<Lexer<TokenKind>> =
    Lazy::new(|| build_lexer().expect("TLG beta code rules compile"));

/// Parses TLG beta code into the character AST.
#[derive(Debug, Clone, Default)]
pub struct TlgBetacodeParser {
    state: CharacterParserState,
}

impl_character_parser!(TlgBetacodeParser);

impl TlgBetacodeParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_text(&mut self, text: &str) -> Result<Vec<CharacterNode>, ParseError> {
        self.reset();
        let tokens = TLG_BETACODE_LEXER.tokenize(text, &[])?;
        self.state.load(text, tokens);
        parse_elements(self, Self::parse_element)
    }

    fn parse_element(&mut self) -> Option<CharacterNode> {
        if self.match_any(&[TokenKind::Uppercase]) {
            return self.parse_uppercase();
        }
        if match_where(self, TokenKind::is_punctuation) {
            return punctuation(self);
        }
        if match_where(self, TokenKind::is_editorial) {
            return editorial_symbol(self);
        }
        if match_where(self, TokenKind::is_space) {
            return space(self);
        }
        if self.match_any(&[TokenKind::Digit]) {
            return number(self);
        }
        // Tokenized but unmatched so far: can only be a small letter.
        self.parse_lowercase()
    }

    fn parse_consonant(&mut self, is_uppercase: bool, annotation: Annotation) -> Option<CharacterNode> {
        let mut data = ConsonantData::new(previous_token(self)?).uppercase(is_uppercase);
        data.annotation = annotation;

        // A capital rho already took its breathing before the letter.
        if data.name.kind == TokenKind::Rho && !is_uppercase && match_where(self, TokenKind::is_breathing) {
            data.annotation.breathing = previous_token(self);
        }
        if data.name.kind == TokenKind::Sigma && self.match_any(&[TokenKind::Digit]) {
            data.annotation.digit = previous_token(self);
        }
        data.has_underdot = self.match_any(&[TokenKind::Underdot]);
        Some(factory::consonant(data))
    }

    fn parse_lowercase(&mut self) -> Option<CharacterNode> {
        if match_where(self, TokenKind::is_consonant) {
            return self.parse_consonant(false, Annotation::default());
        }
        if !match_where(self, TokenKind::is_vowel) {
            self.consume(TokenKind::Alpha, "Expected a vowel");
            return None;
        }

        let mut data = VowelData::new(previous_token(self)?);
        take_mark(self, &mut data, TokenKind::is_breathing);
        take_mark(self, &mut data, TokenKind::is_accent);
        take_mark(self, &mut data, TokenKind::is_modifier);
        take_mark(self, &mut data, TokenKind::is_length_mark);
        data.has_underdot = self.match_any(&[TokenKind::Underdot]);
        Some(factory::vowel(data))
    }

    fn parse_uppercase(&mut self) -> Option<CharacterNode> {
        if match_where(self, TokenKind::is_consonant) {
            return self.parse_consonant(true, Annotation::default());
        }

        let mut breathing = None;
        if match_where(self, TokenKind::is_breathing) {
            breathing = previous_token(self);
            // Rho is the only consonant that takes a diacritic.
            if self.match_any(&[TokenKind::Rho]) {
                let annotation = Annotation {
                    breathing,
                    digit: None,
                };
                return self.parse_consonant(true, annotation);
            }
        }
        let mut accent = None;
        if match_where(self, TokenKind::is_accent) {
            accent = previous_token(self);
        }
        if !match_where(self, TokenKind::is_vowel) {
            self.consume(TokenKind::Alpha, "Expected a vowel");
            return None;
        }

        let mut data = VowelData::new(previous_token(self)?).uppercase(true);
        data.breathing = breathing;
        data.accent = accent;
        take_mark(self, &mut data, TokenKind::is_modifier);
        take_mark(self, &mut data, TokenKind::is_length_mark);
        data.has_underdot = self.match_any(&[TokenKind::Underdot]);
        Some(factory::vowel(data))
    }
}
