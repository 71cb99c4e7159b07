//! Writing the character AST back out as text.
//!
//! Each target encoding has a visitor implementing [`Renderer`]; [`render`]
//! walks an AST through one. [`convert`] chains detection, parsing,
//! normalization and rendering.

pub mod combining;
pub mod convert;
pub mod error;
pub mod glyphs;
pub mod normalize;
pub mod precomposed;
pub mod tlg;
pub mod typegreek;
mod unicode;

pub use combining::CombiningUnicodeVisitor;
pub use convert::{convert, render_as};
pub use error::{ConvertError, RenderError};
pub use normalize::{normalize, normalize_all};
pub use precomposed::PrecomposedUnicodeVisitor;
pub use tlg::TlgBetacodeVisitor;
pub use typegreek::TypeGreekBetacodeVisitor;

use polytonic_protocol::{walk, CharacterNode, CharacterVisitor};
use tracing::debug;

/// A visitor that accumulates output text.
pub trait Renderer: CharacterVisitor<Error = RenderError> {
    /// Hand over the text written so far and start afresh.
    fn finish(&mut self) -> String;
}

/// Walk `ast` through `renderer` and return the text it wrote.
pub fn render<R: Renderer + ?Sized>(ast: &[CharacterNode], renderer: &mut R) -> Result<String, RenderError> {
    let walked = ast
        .iter()
        .enumerate()
        .try_for_each(|(i, node)| walk(&mut *renderer, node, ast.get(i + 1)));
    // Always drain, so a failed render leaves the visitor reusable.
    let output = renderer.finish();
    walked?;
    debug!(nodes = ast.len(), bytes = output.len(), "rendered");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polytonic_parser::{ParserBase, TlgBetacodeParser};

    #[test]
    fn test_renderer_is_reusable_after_error() {
        let mut visitor = TypeGreekBetacodeVisitor::new();
        let bad = TlgBetacodeParser::new().parse("A[").unwrap();
        assert!(render(&bad, &mut visitor).is_err());

        let good = TlgBetacodeParser::new().parse("A").unwrap();
        assert_eq!(render(&good, &mut visitor).unwrap(), "a");
    }

    #[test]
    fn test_empty_ast() {
        assert_eq!(render(&[], &mut TlgBetacodeVisitor::new()).unwrap(), "");
    }
}
