//! The extraction pipeline: declaration walking, aggregation and the three
//! public entry points.

use std::collections::{HashMap, HashSet};

use crate::colour::Colour;
use crate::error::{Result, SwatchError};
use crate::options::{Options, SortOrder};
use crate::stylesheet::{parse_stylesheet, Declaration};
use crate::tokenize::tokenize;
use crate::variables::SelectorVariables;

/// The properties whose values may carry colours. Declarations outside this
/// set contribute nothing, whatever their value text.
const COLOUR_PROPERTIES: &[&str] = &[
    "color",
    "background",
    "background-color",
    "background-image",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-color",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "outline",
    "outline-color",
    "text-decoration",
    "text-decoration-color",
    "text-shadow",
    "box-shadow",
    "fill",
    "stroke",
    "stop-color",
    "flood-color",
    "lighting-color",
];

fn property_allows_colour(property: &str) -> bool {
    COLOUR_PROPERTIES.contains(&property)
}

/// Colour tokens of one declaration, in value order, duplicates kept.
fn declaration_tokens(
    decl: &Declaration,
    options: &Options,
    variables: Option<&SelectorVariables>,
) -> Vec<String> {
    if !property_allows_colour(&decl.property) {
        return Vec::new();
    }
    let resolved = variables.map(|v| v.resolve_for(decl.selector.as_deref()));
    tokenize(&decl.value, options, resolved.as_ref())
}

/// Format, order and deduplicate the surviving tokens.
///
/// Every token reaching this stage passed colour parsing during filtering,
/// so a literal failing to re-parse here is a pipeline invariant violation
/// and raises [`SwatchError::InvalidColourLiteral`].
fn aggregate(tokens: Vec<String>, options: &Options) -> Result<Vec<String>> {
    let mut entries: Vec<(String, f64)> = Vec::with_capacity(tokens.len());

    for literal in tokens {
        let Some(colour) = Colour::parse(&literal) else {
            return Err(SwatchError::InvalidColourLiteral { literal });
        };
        // Formatting never changes the colour value, so the hue of the
        // parsed literal and of the formatted string are the same.
        let hue = colour.hue();
        let formatted = match options.color_format {
            Some(format) => colour
                .to_format(format)
                .ok_or(SwatchError::InvalidColourLiteral { literal })?,
            None => literal,
        };
        entries.push((formatted, hue));
    }

    match options.sort {
        Some(SortOrder::Hue) => {
            entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        }
        Some(SortOrder::Frequency) => {
            let mut counts: HashMap<String, usize> = HashMap::new();
            for (formatted, _) in &entries {
                *counts.entry(formatted.clone()).or_insert(0) += 1;
            }
            // Stable, so ties keep their input order.
            entries.sort_by(|a, b| counts[&b.0].cmp(&counts[&a.0]));
        }
        None => {}
    }

    if options.all_colors {
        return Ok(entries.into_iter().map(|(formatted, _)| formatted).collect());
    }

    let mut seen = HashSet::new();
    let mut colours = Vec::new();
    for (formatted, _) in entries {
        if seen.insert(formatted.clone()) {
            colours.push(formatted);
        }
    }
    Ok(colours)
}

/// Extract the colours of a whole stylesheet.
///
/// Parses `css`, builds the selector-scoped variable map, walks every
/// declaration and runs the full pipeline.
///
/// ```
/// use swatch::{from_css, Options};
///
/// let colours = from_css("a { color: red; } p { color: blue; }", &Options::default()).unwrap();
/// assert_eq!(colours, vec!["red", "blue"]);
/// ```
pub fn from_css(css: &str, options: &Options) -> Result<Vec<String>> {
    let declarations = parse_stylesheet(css)?;
    let variables = SelectorVariables::from_declarations(&declarations);

    let mut tokens = Vec::new();
    for decl in &declarations {
        tokens.extend(declaration_tokens(decl, options, Some(&variables)));
    }
    aggregate(tokens, options)
}

/// Extract the colours of a single already-parsed declaration.
///
/// Pass `variables` to resolve `var()` references against a larger document.
pub fn from_declaration(
    decl: &Declaration,
    options: &Options,
    variables: Option<&SelectorVariables>,
) -> Result<Vec<String>> {
    aggregate(declaration_tokens(decl, options, variables), options)
}

/// Extract the colours of a raw property value.
///
/// No property allow-list applies here; `variables` is a flat map without
/// selector scoping.
pub fn from_value(
    value: &str,
    options: &Options,
    variables: Option<&HashMap<String, String>>,
) -> Result<Vec<String>> {
    aggregate(tokenize(value, options, variables), options)
}
