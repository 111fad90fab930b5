//! Extraction options.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output encoding for extracted colours.
///
/// When no format is requested the original literal text is passed through
/// unchanged. The serde names match the historical JavaScript API, so JSON
/// options documents keep working across ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ColorFormat {
    /// `#RRGGBB`
    #[serde(rename = "hexString")]
    #[value(name = "hex")]
    HexString,
    /// `#RRGGBBAA`
    #[serde(rename = "hexaString")]
    #[value(name = "hexa")]
    HexaString,
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`
    #[serde(rename = "rgbString")]
    #[value(name = "rgb")]
    RgbString,
    /// `rgb(r%, g%, b%)`
    #[serde(rename = "percentString")]
    #[value(name = "percent")]
    PercentString,
    /// `hsl(h, s%, l%)`
    #[serde(rename = "hslString")]
    #[value(name = "hsl")]
    HslString,
    /// `hwb(h, w%, b%)`
    #[serde(rename = "hwbString")]
    #[value(name = "hwb")]
    HwbString,
    /// CSS named colour, only where the name round-trips exactly
    #[serde(rename = "keyword")]
    #[value(name = "keyword")]
    Keyword,
}

/// Ordering applied to the final colour list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending by hue of the formatted colour.
    Hue,
    /// Descending by occurrence count of the formatted string.
    Frequency,
}

/// Configuration for one extraction run.
///
/// Immutable once constructed; the engine never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Drop greys (monochrome colours other than pure black and white).
    pub without_grey: bool,

    /// Drop every monochrome colour, black and white included.
    pub without_monochrome: bool,

    /// Keep every occurrence instead of deduplicating.
    pub all_colors: bool,

    /// Target output encoding; `None` keeps the original literal text.
    pub color_format: Option<ColorFormat>,

    /// Ordering of the result; `None` keeps input order.
    pub sort: Option<SortOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert!(!opts.without_grey);
        assert!(!opts.without_monochrome);
        assert!(!opts.all_colors);
        assert!(opts.color_format.is_none());
        assert!(opts.sort.is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let opts: Options = serde_json::from_str(
            r#"{"withoutGrey": true, "colorFormat": "hexString", "sort": "hue"}"#,
        )
        .unwrap();
        assert!(opts.without_grey);
        assert_eq!(opts.color_format, Some(ColorFormat::HexString));
        assert_eq!(opts.sort, Some(SortOrder::Hue));
    }

    #[test]
    fn test_deserialize_empty() {
        let opts: Options = serde_json::from_str("{}").unwrap();
        assert!(!opts.all_colors);
    }
}
