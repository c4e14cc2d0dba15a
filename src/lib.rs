#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod editor;
pub mod element;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod renderer;
pub mod state;
pub mod template;

pub use app::DesignerApp;
pub use command::{Action, History, reduce};
pub use editor::Editor;
pub use element::{Element, ElementPatch};
pub use error::EditorError;
pub use id_generator::ElementId;
pub use input::CanvasInput;
pub use persistence::{JsonFileStore, StoreError, TemplateStore, decode_template_payload};
pub use state::{EditorState, Mode, ZoomPreset};
pub use template::{Template, TemplateKind, TemplateProperty};
