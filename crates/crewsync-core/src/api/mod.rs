//! REST backend client (wire types + reqwest implementation).

mod rest;
pub mod wire;

pub use rest::RestApi;
