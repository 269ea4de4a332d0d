#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod document;
pub mod drag_path;
pub mod element;
pub mod geometry;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod tools;
pub mod util;
pub mod widgets;

pub use app::CanvasApp;
pub use command::{Command, CommandError};
pub use document::Document;
pub use drag_path::{DragPath, PathRecorder};
pub use element::{Shape, ShapeKind};
pub use input::{InputEvent, InputLocation};
pub use persistence::{CanvasSnapshot, PersistenceError};
pub use renderer::Renderer;
pub use scene::{Drawable, RedrawTimer, Scene};
pub use settings::CanvasSettings;
pub use tools::{ShapeTool, Tool};
pub use widgets::Corner;
