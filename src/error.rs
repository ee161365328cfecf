//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

//! Error types for geometry construction and component bookkeeping

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("edge count must be >= 3, got {0}")]
    InvalidEdgeCount(usize),

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("index {index} out of range for {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("component not found")]
    ComponentNotFound,

    #[error("{vertices} vertices do not fit in a 16-bit index buffer")]
    IndexOverflow { vertices: usize },

    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),

    #[error("config: {0}")]
    Config(String),
}
