//! Colour parsing, classification and formatting.
//!
//! All classification works on the parsed channel values, never on the
//! original literal syntax: `white`, `#fff` and `rgb(255, 255, 255)` all
//! normalize to the same colour before being tested.

use crate::options::ColorFormat;

/// The CSS named colours, alphabetical. Where two names share a value
/// (`cyan`/`aqua`, `grey`/`gray`) the later entry wins the reverse lookup.
const NAMED_COLOURS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// A parsed colour value.
///
/// Thin adapter over the external colour model; every caller in the engine
/// goes through this type so syntax-specific concerns stay in one place.
#[derive(Debug, Clone)]
pub struct Colour(csscolorparser::Color);

impl Colour {
    /// Parse a CSS colour literal.
    ///
    /// Returns `None` for anything that is not a colour. That is the normal
    /// filtering outcome for tokens like `solid` or `url(a.png)`, not an
    /// error.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        // The colour model accepts bare hex digits without a `#` prefix,
        // which CSS does not. Gate those out so tokens like `100` inside a
        // gradient stop list stay non-colours.
        if !s.starts_with('#') && !s.contains('(') && s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        csscolorparser::parse(s).ok().map(Colour)
    }

    /// Red/green/blue/alpha as 8-bit channels.
    pub fn rgba8(&self) -> [u8; 4] {
        self.0.to_rgba8()
    }

    /// Alpha in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.0.a
    }

    /// Hue in degrees `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.0.to_hsla().0
    }

    /// True for colours on the achromatic axis (hue 0, saturation 0), i.e.
    /// grey, black or white.
    pub fn is_monochrome(&self) -> bool {
        let (h, s, _, _) = self.0.to_hsla();
        h == 0.0 && s == 0.0
    }

    /// True for monochrome colours strictly between black and white.
    /// Testing one channel is enough: monochrome guarantees all three are
    /// equal.
    pub fn is_grey(&self) -> bool {
        let red = self.rgba8()[0];
        self.is_monochrome() && red > 0 && red < 255
    }

    /// The CSS keyword for this colour, if one maps back to exactly the same
    /// RGB value. Alpha is ignored, matching how keyword output has always
    /// behaved.
    pub fn keyword(&self) -> Option<&'static str> {
        let [r, g, b, _] = self.rgba8();
        let mut found = None;
        for name in NAMED_COLOURS {
            if let Ok(named) = csscolorparser::parse(name) {
                let [nr, ng, nb, _] = named.to_rgba8();
                if (nr, ng, nb) == (r, g, b) {
                    found = Some(*name);
                }
            }
        }
        found
    }

    /// Serialize into the requested output encoding.
    ///
    /// Returns `None` only for [`ColorFormat::Keyword`] when no named colour
    /// round-trips to this value; every other encoding always succeeds.
    pub fn to_format(&self, format: ColorFormat) -> Option<String> {
        let [r, g, b, a8] = self.rgba8();
        Some(match format {
            ColorFormat::HexString => format!("#{:02X}{:02X}{:02X}", r, g, b),
            ColorFormat::HexaString => format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a8),
            ColorFormat::RgbString => {
                if self.alpha() < 1.0 {
                    format!("rgba({}, {}, {}, {})", r, g, b, round_alpha(self.alpha()))
                } else {
                    format!("rgb({}, {}, {})", r, g, b)
                }
            }
            ColorFormat::PercentString => {
                let (rp, gp, bp) = (percent(self.0.r), percent(self.0.g), percent(self.0.b));
                if self.alpha() < 1.0 {
                    format!("rgba({}%, {}%, {}%, {})", rp, gp, bp, round_alpha(self.alpha()))
                } else {
                    format!("rgb({}%, {}%, {}%)", rp, gp, bp)
                }
            }
            ColorFormat::HslString => {
                let (h, s, l, a) = self.0.to_hsla();
                if a < 1.0 {
                    format!(
                        "hsla({}, {}%, {}%, {})",
                        h.round(),
                        percent(s),
                        percent(l),
                        round_alpha(a)
                    )
                } else {
                    format!("hsl({}, {}%, {}%)", h.round(), percent(s), percent(l))
                }
            }
            ColorFormat::HwbString => {
                let (h, w, bl, a) = self.0.to_hwba();
                if a < 1.0 {
                    format!(
                        "hwb({}, {}%, {}%, {})",
                        h.round(),
                        percent(w),
                        percent(bl),
                        round_alpha(a)
                    )
                } else {
                    format!("hwb({}, {}%, {}%)", h.round(), percent(w), percent(bl))
                }
            }
            ColorFormat::Keyword => return self.keyword().map(str::to_string),
        })
    }
}

fn percent(unit: f64) -> i64 {
    (unit * 100.0).round() as i64
}

fn round_alpha(a: f64) -> f64 {
    (a * 100.0).round() / 100.0
}
