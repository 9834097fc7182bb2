//! Textboard Core Library
//!
//! Platform-agnostic text item store and undo/redo history for the Textboard
//! canvas. The UI layer drives everything through [`Board`].

pub mod board;
pub mod config;
pub mod error;
pub mod history;
pub mod item;
pub mod store;

pub use board::Board;
pub use config::{BoardConfig, DragHistory, TextStyle};
pub use error::{BoardError, BoardResult};
pub use history::HistoryManager;
pub use item::{FontStyle, ItemId, TextColor, TextItem};
pub use store::{ItemStore, Snapshot};
