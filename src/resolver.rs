// src/resolver.rs
use serde_json::Value;
use tracing::trace;

use crate::context::Context;
use crate::expression::{Anchor, Axis, ComponentField, PathExpr, ResourceField, SelectionPath};
use crate::model::{Model, Position, Selection, ViewComponent};
use crate::settings::SettingsCascade;

/// Fixed tag returned by `resource.type`.
const TEXT_DOCUMENT_TYPE: &str = "textDocument";

/// Resolve a computed context-property expression against a model snapshot,
/// a settings cascade, and a fallback context map.
///
/// The return encodes the two distinct absence sentinels:
/// `Some(Value::Null)` means the expression is a recognized computed
/// property that currently has no value (no open component, no selection,
/// unset config key), while `None` means no binding exists at all (unknown
/// fallback key, out-of-range selection index).
pub fn get_computed_context_property(
    model: &Model,
    settings: &SettingsCascade,
    context: &Context,
    expression: &str,
) -> Option<Value> {
    let parsed = PathExpr::parse(expression);
    trace!(expression, path = ?parsed, "resolving computed context property");
    match parsed {
        PathExpr::Config { path } => {
            Some(settings.final_value(path).cloned().unwrap_or(Value::Null))
        }
        PathExpr::Resource(field) => Some(resolve_resource(model, field)),
        PathExpr::Component(field) => Some(resolve_component(model, field)),
        PathExpr::SelectionAt { index } => resolve_selection_at(model, index),
        PathExpr::Fallback(key) => context.get(key).cloned(),
    }
}

fn resolve_resource(model: &Model, field: ResourceField) -> Value {
    let Some(component) = model.primary_component() else {
        return Value::Null;
    };
    let document = component.document();
    match field {
        ResourceField::Uri => Value::from(document.uri.clone()),
        ResourceField::Basename => Value::from(document.basename()),
        ResourceField::Dirname => Value::from(document.dirname()),
        ResourceField::Extname => Value::from(document.extname()),
        ResourceField::Language => Value::from(document.language_id.clone()),
        ResourceField::Type => Value::from(TEXT_DOCUMENT_TYPE),
    }
}

fn resolve_component(model: &Model, field: ComponentField) -> Value {
    let Some(component) = model.primary_component() else {
        return Value::Null;
    };
    match field {
        ComponentField::Type => Value::from(component.type_tag()),
        ComponentField::Selections => Value::Array(
            component
                .selections()
                .iter()
                .map(Selection::to_plain)
                .collect(),
        ),
        ComponentField::Selection(path) => resolve_selection_path(component, path),
    }
}

fn resolve_selection_path(component: &ViewComponent, path: SelectionPath) -> Value {
    let Some(selection) = component.primary_selection() else {
        return Value::Null;
    };
    match path {
        SelectionPath::Whole => selection.to_plain(),
        SelectionPath::Endpoint(anchor) => endpoint(selection, anchor).to_plain(),
        SelectionPath::Coordinate(anchor, axis) => {
            let position = endpoint(selection, anchor);
            match axis {
                Axis::Line => Value::from(position.line),
                Axis::Character => Value::from(position.character),
            }
        }
    }
}

fn endpoint(selection: &Selection, anchor: Anchor) -> &Position {
    match anchor {
        Anchor::Start => &selection.start,
        Anchor::End => &selection.end,
    }
}

/// `get(component.selections, i)`: `None` (rather than `Null`) when the
/// index misses, matching map-lookup semantics for unknown bindings.
fn resolve_selection_at(model: &Model, index: i64) -> Option<Value> {
    let Some(component) = model.primary_component() else {
        return Some(Value::Null);
    };
    let index = usize::try_from(index).ok()?;
    component
        .selections()
        .get(index)
        .map(Selection::to_plain)
}
