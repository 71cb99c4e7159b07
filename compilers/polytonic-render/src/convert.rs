use polytonic_parser::{identify_encoding, parse_as};
use polytonic_protocol::{CharacterNode, Encoding};
use tracing::{debug, info};

use crate::error::ConvertError;
use crate::normalize::normalize_all;
use crate::{
    render, CombiningUnicodeVisitor, PrecomposedUnicodeVisitor, TlgBetacodeVisitor,
    TypeGreekBetacodeVisitor,
};

/// Write `ast` in the `to` encoding.
///
/// Unicode targets get illegal diacritics stripped first. A plain
/// [`Encoding::Unicode`] target is written precomposed.
pub fn render_as(ast: &[CharacterNode], to: Encoding) -> Result<String, ConvertError> {
    let output = match to {
        Encoding::TlgBetaCode => render(ast, &mut TlgBetacodeVisitor::new())?,
        Encoding::TypegreekBetaCode => render(ast, &mut TypeGreekBetacodeVisitor::new())?,
        Encoding::Unicode | Encoding::UnicodePrecomposed => {
            render(&normalize_all(ast), &mut PrecomposedUnicodeVisitor::new())?
        }
        Encoding::UnicodeCombining => render(&normalize_all(ast), &mut CombiningUnicodeVisitor::new())?,
        Encoding::Unknown => return Err(ConvertError::UnknownTarget),
    };
    Ok(output)
}

/// Convert `text` from `from` (detected when `None`) into `to`.
pub fn convert(text: &str, from: Option<Encoding>, to: Encoding) -> Result<String, ConvertError> {
    if to == Encoding::Unknown {
        return Err(ConvertError::UnknownTarget);
    }
    let from = match from {
        Some(encoding) => encoding,
        None => {
            let detected = identify_encoding(text);
            debug!(%detected, "detected source encoding");
            detected
        }
    };
    let ast = parse_as(from, text)
        .ok_or(ConvertError::UnknownSource)?
        .map_err(|source| ConvertError::Parse {
            encoding: from,
            source,
        })?;
    info!(%from, %to, characters = ast.len(), "converting");
    render_as(&ast, to)
}
