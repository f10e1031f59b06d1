//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - File locations
//! - Handing generated HTML to the browser

pub mod error;
pub mod paths;
pub mod viewer;
