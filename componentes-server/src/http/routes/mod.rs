//! Route handlers organized by resource

pub mod componentes;
pub mod health;
