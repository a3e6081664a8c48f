//! Context evaluation for an extensible code-intelligence client: resolves
//! dotted context-property expressions (`config.a.b`, `resource.basename`,
//! `component.selection.start.line`, ...) against a snapshot of editor state
//! and a settings cascade, and merges incremental context updates into a
//! persistent key/value context map.

pub mod context;
pub mod errors;
pub mod model;
pub mod resolver;
pub mod settings;
mod expression; // expression strings parsed once into tagged path variants
mod parser;

pub use context::{apply_context_update, Context};
pub use model::{Model, Position, Selection, TextDocumentItem, ViewComponent};
pub use resolver::get_computed_context_property;
pub use settings::SettingsCascade;
