//! swatch - colour extraction for CSS stylesheets
//!
//! A library for pulling the colour values out of stylesheet text, with
//! optional filtering (greys, monochromes), reformatting (hex, rgb, hsl,
//! hwb, keyword) and ordering (hue, frequency).
//!
//! Three entry points cover the usual starting positions:
//! [`from_css`] for whole stylesheets, [`from_declaration`] for a single
//! parsed declaration, and [`from_value`] for a bare property value.

pub mod cli;
pub mod colour;
pub mod error;
pub mod extract;
pub mod options;
pub mod stylesheet;
pub mod tokenize;
pub mod variables;

pub use colour::Colour;
pub use error::{Result, SwatchError};
pub use extract::{from_css, from_declaration, from_value};
pub use options::{ColorFormat, Options, SortOrder};
pub use stylesheet::{parse_stylesheet, Declaration};
pub use variables::SelectorVariables;
