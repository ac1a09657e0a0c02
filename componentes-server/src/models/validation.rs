//! Validation error types

use std::fmt;

/// Validation error for request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `nombre` or `tipo` is missing or blank
    CamposObligatorios,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CamposObligatorios => write!(f, "Campos obligatorios: nombre y tipo"),
        }
    }
}

impl std::error::Error for ValidationError {}
