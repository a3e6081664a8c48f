// src/model.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot of the client's visible editor state. Only the first component
/// and its first selection are "primary" for computed-property purposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub visible_view_components: Vec<ViewComponent>,
}

impl Model {
    /// The first visible view component, if any is open.
    pub fn primary_component(&self) -> Option<&ViewComponent> {
        self.visible_view_components.first()
    }
}

/// An open, currently-displayed view. The serialized tag (`"textEditor"`) is
/// also the value of the `component.type` computed property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewComponent {
    TextEditor {
        item: TextDocumentItem,
        selections: Vec<Selection>,
    },
}

impl ViewComponent {
    pub fn type_tag(&self) -> &'static str {
        match self {
            ViewComponent::TextEditor { .. } => "textEditor",
        }
    }

    pub fn document(&self) -> &TextDocumentItem {
        match self {
            ViewComponent::TextEditor { item, .. } => item,
        }
    }

    pub fn selections(&self) -> &[Selection] {
        match self {
            ViewComponent::TextEditor { selections, .. } => selections,
        }
    }

    /// The first selection of this component.
    pub fn primary_selection(&self) -> Option<&Selection> {
        self.selections().first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    pub uri: String,
    pub language_id: String,
    pub text: String,
}

impl TextDocumentItem {
    /// Characters after the final `/` of the uri; the whole uri if it
    /// contains no `/`.
    pub fn basename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(i) => &self.uri[i + 1..],
            None => &self.uri,
        }
    }

    /// The uri with the trailing `/<basename>` removed; empty if the uri
    /// contains no `/`.
    pub fn dirname(&self) -> &str {
        match self.uri.rfind('/') {
            Some(i) => &self.uri[..i],
            None => "",
        }
    }

    /// Substring from the last `.` of the basename to the end, inclusive of
    /// the dot; empty if the basename has no dot.
    pub fn extname(&self) -> &str {
        let basename = self.basename();
        match basename.rfind('.') {
            Some(i) => &basename[i..],
            None => "",
        }
    }
}

/// Zero-based line/character pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    pub fn to_plain(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// A selection range. Serializes to the plain form
/// `{"start":{...},"end":{...},"isReversed":...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub start: Position,
    pub end: Position,
    pub is_reversed: bool,
}

impl Selection {
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            is_reversed: false,
        }
    }

    pub fn to_plain(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
