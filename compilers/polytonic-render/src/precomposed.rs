use polytonic_protocol::{
    CharacterVisitor, Consonant, EditorialSymbol, Encoding, Punctuation, Space, Vowel, WordPosition,
};
use unicode_normalization::UnicodeNormalization;

use crate::error::RenderError;
use crate::{unicode, Renderer};

/// Writes Unicode Greek with precomposed letters (NFC).
#[derive(Debug, Default)]
pub struct PrecomposedUnicodeVisitor {
    output: String,
}

impl PrecomposedUnicodeVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterVisitor for PrecomposedUnicodeVisitor {
    type Error = RenderError;

    fn visit_vowel(&mut self, vowel: &Vowel) -> Result<(), RenderError> {
        self.output.extend(unicode::vowel(vowel)?.nfc());
        Ok(())
    }

    fn visit_consonant(&mut self, consonant: &Consonant, position: WordPosition) -> Result<(), RenderError> {
        self.output.extend(unicode::consonant(consonant, position)?.nfc());
        Ok(())
    }

    fn visit_punctuation(&mut self, punctuation: &Punctuation) -> Result<(), RenderError> {
        self.output
            .push_str(unicode::punctuation(punctuation, Encoding::UnicodePrecomposed)?);
        Ok(())
    }

    fn visit_editorial_symbol(&mut self, symbol: &EditorialSymbol) -> Result<(), RenderError> {
        self.output.extend(unicode::editorial_symbol(symbol).nfc());
        Ok(())
    }

    fn visit_space(&mut self, space: &Space) -> Result<(), RenderError> {
        self.output.push_str(&space.token.lexeme);
        Ok(())
    }
}

impl Renderer for PrecomposedUnicodeVisitor {
    fn finish(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
