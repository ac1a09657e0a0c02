//! Domain models and boundary validation

pub mod componente;
pub mod validation;

pub use componente::{Componente, ComponenteCambios, ComponentePayload, NuevoComponente};
pub use validation::ValidationError;
