use polytonic_parser::ParseError;
use polytonic_protocol::Encoding;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The target encoding has no way of writing this character.
    #[error("{what} cannot be written in {target}")]
    Unrepresentable { what: String, target: Encoding },
}

impl RenderError {
    pub(crate) fn unrepresentable(what: impl Into<String>, target: Encoding) -> Self {
        RenderError::Unrepresentable {
            what: what.into(),
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("could not identify the encoding of the input")]
    UnknownSource,

    #[error("cannot convert into an unknown encoding")]
    UnknownTarget,

    #[error("failed to read {encoding} input: {source}")]
    Parse {
        encoding: Encoding,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}
