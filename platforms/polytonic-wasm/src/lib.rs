use polytonic_parser::{identify_encoding, parse_as};
use polytonic_protocol::{CharacterNode, Encoding};
use polytonic_render::{render_as, ConvertError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub source: Encoding,
    pub target: Encoding,
    pub output: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AstReport {
    pub source: Encoding,
    pub nodes: Vec<CharacterNode>,
    pub errors: Vec<String>,
}

fn parse_encoding(name: Option<&str>) -> Result<Option<Encoding>, String> {
    name.map(|n| n.parse::<Encoding>().map_err(|e| e.to_string()))
        .transpose()
}

fn error_messages(error: &ConvertError) -> Vec<String> {
    match error {
        ConvertError::Parse { source, .. } => source.messages(),
        other => vec![other.to_string()],
    }
}

/// The converter instance running in the browser.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct PolytonicEngine {
    target: Option<Encoding>,
}

impl PolytonicEngine {
    fn source(text: &str, from: Option<&str>) -> Result<Encoding, String> {
        Ok(parse_encoding(from)?.unwrap_or_else(|| identify_encoding(text)))
    }

    fn parse(text: &str, source: Encoding) -> Result<Vec<CharacterNode>, Vec<String>> {
        match parse_as(source, text) {
            Some(Ok(nodes)) => Ok(nodes),
            Some(Err(e)) => Err(e.messages()),
            None => Err(vec![ConvertError::UnknownSource.to_string()]),
        }
    }

    pub fn convert_report(&self, text: &str, from: Option<&str>, to: Option<&str>) -> ConversionReport {
        let mut report = ConversionReport {
            source: Encoding::Unknown,
            target: self.target.unwrap_or(Encoding::UnicodePrecomposed),
            output: None,
            errors: Vec::new(),
        };
        match Self::source(text, from) {
            Ok(source) => report.source = source,
            Err(e) => report.errors.push(e),
        }
        match parse_encoding(to) {
            Ok(Some(target)) => report.target = target,
            Ok(None) => {}
            Err(e) => report.errors.push(e),
        }
        if !report.errors.is_empty() {
            return report;
        }

        let rendered = Self::parse(text, report.source)
            .and_then(|ast| render_as(&ast, report.target).map_err(|e| error_messages(&e)));
        match rendered {
            Ok(output) => report.output = Some(output),
            Err(errors) => report.errors = errors,
        }
        report
    }

    pub fn ast_report(&self, text: &str, from: Option<&str>) -> AstReport {
        let mut report = AstReport {
            source: Encoding::Unknown,
            nodes: Vec::new(),
            errors: Vec::new(),
        };
        let parsed = Self::source(text, from)
            .map_err(|e| vec![e])
            .and_then(|source| {
                report.source = source;
                Self::parse(text, source)
            });
        match parsed {
            Ok(nodes) => report.nodes = nodes,
            Err(errors) => report.errors = errors,
        }
        report
    }
}

#[wasm_bindgen]
impl PolytonicEngine {
    /// `target` names the default output encoding; precomposed Unicode
    /// when absent or unknown.
    #[wasm_bindgen(constructor)]
    pub fn new(target: Option<String>) -> Self {
        let target = target.and_then(|t| t.parse().ok());
        Self { target }
    }

    /// The encoding name for `text`, e.g. `"tlg_beta_code"`.
    pub fn identify(&self, text: &str) -> String {
        identify_encoding(text).as_str().to_string()
    }

    /// Text -> detect -> parse -> render, as a [`ConversionReport`].
    pub fn convert(&self, text: &str, from: Option<String>, to: Option<String>) -> Result<JsValue, JsValue> {
        let report = self.convert_report(text, from.as_deref(), to.as_deref());
        serde_wasm_bindgen::to_value(&report).map_err(JsValue::from)
    }

    /// The character AST of `text`, as an [`AstReport`].
    pub fn ast(&self, text: &str, from: Option<String>) -> Result<JsValue, JsValue> {
        let report = self.ast_report(text, from.as_deref());
        serde_wasm_bindgen::to_value(&report).map_err(JsValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_report() {
        let engine = PolytonicEngine::new(None);
        let report = engine.convert_report("LOGOS", Some("tlg"), None);
        assert_eq!(report.source, Encoding::TlgBetaCode);
        assert_eq!(report.target, Encoding::UnicodePrecomposed);
        assert_eq!(report.output.as_deref(), Some("λογος"));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_default_target() {
        let engine = PolytonicEngine::new(Some("tlg".to_string()));
        let report = engine.convert_report("λόγος", None, None);
        assert_eq!(report.source, Encoding::UnicodePrecomposed);
        assert_eq!(report.output.as_deref(), Some("LO/GOS"));
    }

    #[test]
    fn test_errors_are_reported() {
        let engine = PolytonicEngine::default();
        let report = engine.convert_report("A/ B", Some("tlg"), Some("latin1"));
        assert!(report.output.is_none());
        assert_eq!(report.errors.len(), 1);

        let report = engine.convert_report("*/ *(", Some("tlg"), None);
        assert!(report.output.is_none());
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_identify_and_ast() {
        let engine = PolytonicEngine::default();
        assert_eq!(engine.identify("*)A"), "tlg_beta_code");
        let report = engine.ast_report("*)A", None);
        assert_eq!(report.nodes.len(), 1);
        assert!(report.errors.is_empty());
    }
}
