//! Componente entity and request payloads
//!
//! The transport payload keeps every field optional; validation at the
//! boundary turns it into either a fully-defaulted insert value or an
//! explicit partial-update value before any storage call.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A hardware component as stored (and returned to clients)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Componente {
    pub id: i32,
    pub nombre: String,
    pub tipo: String,
    pub marca: Option<String>,
    pub precio: f64,
    pub stock: i32,
}

/// Raw JSON body for POST and PUT requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentePayload {
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub marca: Option<String>,
    pub precio: Option<f64>,
    pub stock: Option<i32>,
}

/// Validated insert value with defaults applied
#[derive(Debug, Clone)]
pub struct NuevoComponente {
    pub nombre: String,
    pub tipo: String,
    pub marca: Option<String>,
    pub precio: f64,
    pub stock: i32,
}

/// Explicit partial update: a `None` field keeps its stored value
#[derive(Debug, Clone, Default)]
pub struct ComponenteCambios {
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub marca: Option<String>,
    pub precio: Option<f64>,
    pub stock: Option<i32>,
}

impl ComponentePayload {
    /// Validate for creation: `nombre` and `tipo` must be present and
    /// non-blank; missing optionals default to null/0/0.
    pub fn into_nuevo(self) -> Result<NuevoComponente, ValidationError> {
        let nombre = required(self.nombre)?;
        let tipo = required(self.tipo)?;

        Ok(NuevoComponente {
            nombre,
            tipo,
            marca: self.marca,
            precio: self.precio.unwrap_or(0.0),
            stock: self.stock.unwrap_or(0),
        })
    }

    /// Validate for update. `nombre` and `tipo` are still mandatory even
    /// though the merge would tolerate their absence; the route contract
    /// rejects bodies without them.
    pub fn into_cambios(self) -> Result<ComponenteCambios, ValidationError> {
        let nombre = required(self.nombre)?;
        let tipo = required(self.tipo)?;

        Ok(ComponenteCambios {
            nombre: Some(nombre),
            tipo: Some(tipo),
            marca: self.marca,
            precio: self.precio,
            stock: self.stock,
        })
    }
}

fn required(value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ValidationError::CamposObligatorios),
    }
}
