//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Fenced code blocks and the scanner that finds them
//! - Layout settings with their declared ranges
//! - Message types for the event system

pub mod code_block;
pub mod messages;
pub mod settings;

pub use code_block::{CodeBlock, CodeBlocks, extract_code_blocks};
pub use messages::Message;
pub use settings::{SettingKey, SettingsDocument};
