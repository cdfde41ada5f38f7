//! HTTP layer for the `cep-weather` service.
//!
//! The binary in `main.rs` wires configuration and the real upstream
//! clients into [`routes::router`]; tests drive the same router with
//! stand-in resolvers.

pub mod routes;

pub use routes::{AppState, router};
