//! Execution Engine
//!
//! Parameter encoding and batch processing.

pub mod batch;
pub mod params;
