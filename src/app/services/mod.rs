//! Services layer - conversion building blocks.
//!
//! This module contains the operations a conversion is assembled from:
//! - Markdown rendering
//! - Table extraction from rendered HTML
//! - Code highlighting
//! - CSV output and the table stylesheet
//! - Settings persistence

pub mod csv_export;
pub mod highlight;
pub mod markdown;
pub mod settings_store;
pub mod stylesheet;
pub mod table;

pub use highlight::{Highlighter, SyntectHighlighter};
pub use markdown::{CmarkRenderer, MarkdownRenderer};
pub use settings_store::SettingsStore;
pub use table::{HtmlTableExtractor, TableExtractor, TableRows};
