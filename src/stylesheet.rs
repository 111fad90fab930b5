//! Stylesheet parsing.
//!
//! Built on the `cssparser` tokenizer. The engine only needs the flat
//! sequence of declarations with their enclosing selector text, so the rule
//! parsers here capture raw slices instead of interpreting values; all value
//! interpretation happens downstream in the tokenizer.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::error::SwatchError;

/// A single `property: value` pair with its enclosing selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    /// Raw selector text of the enclosing rule, absent for declarations
    /// constructed outside any rule.
    pub selector: Option<String>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            selector: None,
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }
}

/// Parse a stylesheet into its declaration sequence, in source order.
///
/// Descends into at-rule blocks (`@media`, `@supports`), so nested rules
/// contribute their declarations too. Statement at-rules (`@import ...;`)
/// are skipped. Tokenizer-level syntax errors are surfaced unreinterpreted.
pub fn parse_stylesheet(css: &str) -> crate::error::Result<Vec<Declaration>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut walker = DeclarationWalker {
        declarations: Vec::new(),
    };

    let rules = cssparser::StyleSheetParser::new(&mut parser, &mut walker);
    for result in rules {
        if let Err(e) = result {
            return Err(SwatchError::Parse {
                message: format!("{:?}", e.0),
                help: None,
            });
        }
    }

    Ok(walker.declarations)
}

struct DeclarationWalker {
    declarations: Vec<Declaration>,
}

impl<'i> QualifiedRuleParser<'i> for DeclarationWalker {
    type Prelude = String;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next().is_ok() {}
        Ok(input.slice_from(start).trim().to_string())
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = RawDeclarationParser;
        let body = RuleBodyParser::new(input, &mut decl_parser);

        for (property, value) in body.flatten() {
            self.declarations.push(Declaration {
                property,
                value,
                selector: Some(selector.clone()),
            });
        }
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for DeclarationWalker {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        // The prelude text does not matter for extraction.
        while input.next().is_ok() {}
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        // Recurse so rules nested under @media and friends are walked.
        let nested = cssparser::StyleSheetParser::new(input, self);
        for _ in nested {}
        Ok(())
    }

    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
    ) -> std::result::Result<Self::AtRule, ()> {
        Ok(())
    }
}

/// Captures every declaration as raw `(property, value)` text, custom
/// properties included.
struct RawDeclarationParser;

impl<'i> DeclarationParser<'i> for RawDeclarationParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next().is_ok() {}
        let value = input.slice_from(start).trim().to_string();
        Ok((name.as_ref().to_string(), value))
    }
}

impl<'i> AtRuleParser<'i> for RawDeclarationParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for RawDeclarationParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for RawDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_rule() {
        let decls = parse_stylesheet("a { color: red; }").unwrap();
        assert_eq!(
            decls,
            vec![Declaration::new("color", "red").with_selector("a")]
        );
    }

    #[test]
    fn test_parse_multiple_rules_in_order() {
        let decls =
            parse_stylesheet("a { color: red; } p { display: block; color: blue; }").unwrap();
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0].property, "color");
        assert_eq!(decls[1].property, "display");
        assert_eq!(decls[2].value, "blue");
        assert_eq!(decls[2].selector.as_deref(), Some("p"));
    }

    #[test]
    fn test_parse_keeps_raw_value_text() {
        let decls =
            parse_stylesheet("a { background: red url(../foo.jpg) no-repeat center center; }")
                .unwrap();
        assert_eq!(decls[0].value, "red url(../foo.jpg) no-repeat center center");
    }

    #[test]
    fn test_parse_group_selector() {
        let decls = parse_stylesheet("a, p { color: red; }").unwrap();
        assert_eq!(decls[0].selector.as_deref(), Some("a, p"));
    }

    #[test]
    fn test_parse_descends_into_media_blocks() {
        let decls =
            parse_stylesheet("a { color: red; } @media screen { a { color: blue; } }").unwrap();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[1].value, "blue");
        assert_eq!(decls[1].selector.as_deref(), Some("a"));
    }

    #[test]
    fn test_parse_skips_statement_at_rules() {
        let decls = parse_stylesheet("@import url(base.css); a { color: red; }").unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].value, "red");
    }

    #[test]
    fn test_parse_captures_custom_properties() {
        let decls = parse_stylesheet(":root { --brand: #123123; }").unwrap();
        assert_eq!(
            decls,
            vec![Declaration::new("--brand", "#123123").with_selector(":root")]
        );
    }
}
