//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models and services:
//! - Table and code conversions

pub mod conversion;

pub use conversion::{CodeRender, ConversionMode, Converter, OnUnknownLanguage, SkippedBlock};
