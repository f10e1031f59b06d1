//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (CodeBlock, Settings, Messages)
//! - `controllers/` - Orchestration (Converter)
//! - `services/` - Building blocks (Markdown, tables, highlighting, CSV, settings file)
//! - `infrastructure/` - External integrations (paths, browser, error)
//! - `session.rs` - Per-run owner of settings, converter and output file

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod session;

// Re-exports for convenient external access
pub use controllers::{ConversionMode, Converter, OnUnknownLanguage, SkippedBlock};
pub use domain::{CodeBlock, Message, SettingKey, SettingsDocument, extract_code_blocks};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::paths::AppPaths;
pub use infrastructure::viewer::{BrowserViewer, DocumentViewer};
pub use services::SettingsStore;
pub use session::{ConversionReport, Session};
