use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding {0:?} (expected one of: tlg_beta_code, typegreek_beta_code, unicode, unicode_precomposed, unicode_combining)")]
pub struct UnknownEncoding(pub String);

/// The textual encodings a Greek text may arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Encoding {
    /// Strict scholarly beta code with `*` capital markers.
    TlgBetaCode,
    /// Keyboard beta code; letter case carries capitalization.
    TypegreekBetaCode,
    /// Unicode Greek mixing precomposed and combining diacritics.
    Unicode,
    UnicodePrecomposed,
    UnicodeCombining,
    Unknown,
}

impl Encoding {
    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::TlgBetaCode => "tlg_beta_code",
            Encoding::TypegreekBetaCode => "typegreek_beta_code",
            Encoding::Unicode => "unicode",
            Encoding::UnicodePrecomposed => "unicode_precomposed",
            Encoding::UnicodeCombining => "unicode_combining",
            Encoding::Unknown => "unknown",
        }
    }

    pub fn is_unicode(self) -> bool {
        matches!(
            self,
            Encoding::Unicode | Encoding::UnicodePrecomposed | Encoding::UnicodeCombining
        )
    }

    pub fn is_betacode(self) -> bool {
        matches!(self, Encoding::TlgBetaCode | Encoding::TypegreekBetaCode)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    /// Accepts the canonical names plus a few short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "tlg_beta_code" | "tlg" => Ok(Encoding::TlgBetaCode),
            "typegreek_beta_code" | "typegreek" => Ok(Encoding::TypegreekBetaCode),
            "unicode" => Ok(Encoding::Unicode),
            "unicode_precomposed" | "precomposed" | "nfc" => Ok(Encoding::UnicodePrecomposed),
            "unicode_combining" | "combining" | "nfd" => Ok(Encoding::UnicodeCombining),
            "unknown" => Ok(Encoding::Unknown),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}
