use polytonic_protocol::{
    CharacterVisitor, Consonant, EditorialSymbol, Encoding, Punctuation, Space, Vowel, WordPosition,
};
use unicode_normalization::UnicodeNormalization;

use crate::error::RenderError;
use crate::{unicode, Renderer};

/// Writes Unicode Greek as base letters followed by combining marks in
/// canonical (NFD) order.
#[derive(Debug, Default)]
pub struct CombiningUnicodeVisitor {
    output: String,
}

impl CombiningUnicodeVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterVisitor for CombiningUnicodeVisitor {
    type Error = RenderError;

    fn visit_vowel(&mut self, vowel: &Vowel) -> Result<(), RenderError> {
        self.output.extend(unicode::vowel(vowel)?.nfd());
        Ok(())
    }

    fn visit_consonant(&mut self, consonant: &Consonant, position: WordPosition) -> Result<(), RenderError> {
        self.output.extend(unicode::consonant(consonant, position)?.nfd());
        Ok(())
    }

    fn visit_punctuation(&mut self, punctuation: &Punctuation) -> Result<(), RenderError> {
        self.output
            .push_str(unicode::punctuation(punctuation, Encoding::UnicodeCombining)?);
        Ok(())
    }

    fn visit_editorial_symbol(&mut self, symbol: &EditorialSymbol) -> Result<(), RenderError> {
        self.output.extend(unicode::editorial_symbol(symbol).nfd());
        Ok(())
    }

    fn visit_space(&mut self, space: &Space) -> Result<(), RenderError> {
        self.output.push_str(&space.token.lexeme);
        Ok(())
    }
}

impl Renderer for CombiningUnicodeVisitor {
    fn finish(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_all;
    use crate::render;
    use polytonic_parser::detect::is_combining_greek;
    use polytonic_parser::{ParserBase, TlgBetacodeParser, UnicodeGreekParser};

    fn from_tlg(text: &str) -> String {
        let ast = TlgBetacodeParser::new().parse(text).unwrap();
        render(&normalize_all(&ast), &mut CombiningUnicodeVisitor::new()).unwrap()
    }

    #[test]
    fn test_marks_in_canonical_order() {
        // Underdot sorts before the other marks above.
        assert_eq!(from_tlg("W(=|?"), "ω\u{0323}\u{0314}\u{0342}\u{0345}");
        assert_eq!(from_tlg("A)%27"), "α\u{0304}\u{0313}");
    }

    #[test]
    fn test_iliad_is_combining() {
        let output = from_tlg(r"*MH=NIN A)/EIDE QEA\ *PHLHI+A/DEW *)AXILH=OS");
        let expected: String = "Μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος".nfd().collect();
        assert_eq!(output, expected);
        assert!(is_combining_greek(&output));
    }

    #[test]
    fn test_round_trip_through_unicode_parser() {
        let text: String = "ἐξ οὗ δὴ τὰ πρῶτα διαστήτην ἐρίσαντε".nfd().collect();
        let ast = UnicodeGreekParser::new().parse(&text).unwrap();
        let output = render(&normalize_all(&ast), &mut CombiningUnicodeVisitor::new()).unwrap();
        assert_eq!(output, text);
    }
}
