// src/expression.rs
use crate::errors::{ParseError, Result};
use crate::parser::Parser;

/// A context-property expression, parsed once into a closed set of tagged
/// path variants so the resolver can dispatch exhaustively.
///
/// Anything that is not a recognized computed-property path (unknown fields
/// under a known prefix included) becomes [`PathExpr::Fallback`] and is
/// looked up verbatim in the fallback context map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathExpr<'a> {
    /// `config.<path>`; the remainder may itself contain dots.
    Config { path: &'a str },
    /// `resource.<field>` against the primary component's document.
    Resource(ResourceField),
    /// `component.<field>` against the primary component.
    Component(ComponentField),
    /// `get(component.selections, <index>)`.
    SelectionAt { index: i64 },
    /// Verbatim key in the fallback context map.
    Fallback(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceField {
    Uri,
    Basename,
    Dirname,
    Extname,
    Language,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentField {
    Type,
    Selection(SelectionPath),
    Selections,
}

/// Sub-path into `component.selection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPath {
    Whole,
    Endpoint(Anchor),
    Coordinate(Anchor, Axis),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Line,
    Character,
}

impl<'a> PathExpr<'a> {
    /// Total over all inputs: unrecognized or malformed expressions parse as
    /// `Fallback` rather than failing.
    pub fn parse(expression: &'a str) -> Self {
        if expression.starts_with("get(") {
            if let Ok(parsed) = parse_get_call(expression) {
                return parsed;
            }
            return PathExpr::Fallback(expression);
        }
        if let Some(path) = expression.strip_prefix("config.") {
            return PathExpr::Config { path };
        }
        if let Some(field) = expression.strip_prefix("resource.") {
            if let Some(field) = parse_resource_field(field) {
                return PathExpr::Resource(field);
            }
            return PathExpr::Fallback(expression);
        }
        if let Some(field) = expression.strip_prefix("component.") {
            if let Some(field) = parse_component_field(field) {
                return PathExpr::Component(field);
            }
            return PathExpr::Fallback(expression);
        }
        PathExpr::Fallback(expression)
    }
}

fn parse_resource_field(field: &str) -> Option<ResourceField> {
    match field {
        "uri" => Some(ResourceField::Uri),
        "basename" => Some(ResourceField::Basename),
        "dirname" => Some(ResourceField::Dirname),
        "extname" => Some(ResourceField::Extname),
        "language" => Some(ResourceField::Language),
        "type" => Some(ResourceField::Type),
        _ => None,
    }
}

fn parse_component_field(field: &str) -> Option<ComponentField> {
    let selection_path = match field {
        "type" => return Some(ComponentField::Type),
        "selections" => return Some(ComponentField::Selections),
        "selection" => SelectionPath::Whole,
        "selection.start" => SelectionPath::Endpoint(Anchor::Start),
        "selection.end" => SelectionPath::Endpoint(Anchor::End),
        "selection.start.line" => SelectionPath::Coordinate(Anchor::Start, Axis::Line),
        "selection.start.character" => SelectionPath::Coordinate(Anchor::Start, Axis::Character),
        "selection.end.line" => SelectionPath::Coordinate(Anchor::End, Axis::Line),
        "selection.end.character" => SelectionPath::Coordinate(Anchor::End, Axis::Character),
        _ => return None,
    };
    Some(ComponentField::Selection(selection_path))
}

/// The only supported call form is `get(component.selections, <index>)`.
fn parse_get_call(expression: &str) -> Result<PathExpr<'_>> {
    let mut p = Parser::new(expression);
    let name = p.parse_identifier()?;
    if name != "get" {
        return Err(ParseError::InvalidSyntax("expected 'get'".into()));
    }
    p.skip_ws();
    p.expect('(')?;
    p.skip_ws();
    let target = p.parse_dotted_path()?;
    if target != "component.selections" {
        return Err(ParseError::InvalidSyntax(format!(
            "cannot index into '{target}'"
        )));
    }
    p.skip_ws();
    p.expect(',')?;
    p.skip_ws();
    let index = p.parse_int()?;
    p.skip_ws();
    p.expect(')')?;
    p.skip_ws();
    if !p.eof() {
        return Err(ParseError::InvalidSyntax("trailing input".into()));
    }
    Ok(PathExpr::SelectionAt { index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_keeps_the_dotted_remainder() {
        assert_eq!(PathExpr::parse("config.a.b"), PathExpr::Config { path: "a.b" });
        assert_eq!(PathExpr::parse("config.x"), PathExpr::Config { path: "x" });
    }

    #[test]
    fn resource_fields() {
        assert_eq!(
            PathExpr::parse("resource.basename"),
            PathExpr::Resource(ResourceField::Basename)
        );
        assert_eq!(
            PathExpr::parse("resource.type"),
            PathExpr::Resource(ResourceField::Type)
        );
    }

    #[test]
    fn selection_sub_paths() {
        assert_eq!(
            PathExpr::parse("component.selection"),
            PathExpr::Component(ComponentField::Selection(SelectionPath::Whole))
        );
        assert_eq!(
            PathExpr::parse("component.selection.end"),
            PathExpr::Component(ComponentField::Selection(SelectionPath::Endpoint(
                Anchor::End
            )))
        );
        assert_eq!(
            PathExpr::parse("component.selection.start.character"),
            PathExpr::Component(ComponentField::Selection(SelectionPath::Coordinate(
                Anchor::Start,
                Axis::Character
            )))
        );
    }

    #[test]
    fn get_call_with_whitespace() {
        assert_eq!(
            PathExpr::parse("get(component.selections, 1)"),
            PathExpr::SelectionAt { index: 1 }
        );
        assert_eq!(
            PathExpr::parse("get( component.selections , 0 )"),
            PathExpr::SelectionAt { index: 0 }
        );
    }

    #[test]
    fn unknown_fields_fall_back_to_plain_keys() {
        assert_eq!(
            PathExpr::parse("resource.bogus"),
            PathExpr::Fallback("resource.bogus")
        );
        assert_eq!(
            PathExpr::parse("component.selection.middle"),
            PathExpr::Fallback("component.selection.middle")
        );
        assert_eq!(PathExpr::parse("resource"), PathExpr::Fallback("resource"));
        assert_eq!(PathExpr::parse("x"), PathExpr::Fallback("x"));
    }

    #[test]
    fn malformed_get_calls_fall_back() {
        assert_eq!(
            PathExpr::parse("get(component.selections)"),
            PathExpr::Fallback("get(component.selections)")
        );
        assert_eq!(
            PathExpr::parse("get(other.path, 1)"),
            PathExpr::Fallback("get(other.path, 1)")
        );
        assert_eq!(
            PathExpr::parse("get(component.selections, 1) extra"),
            PathExpr::Fallback("get(component.selections, 1) extra")
        );
    }
}
