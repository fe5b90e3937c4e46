// Q1.15 dot-product fixture generator
pub mod error;
pub mod quant;
pub mod golden;
pub mod rng;
pub mod draw;
pub mod fixture;
pub mod io;

pub use error::{FixtureError, Result};
pub use fixture::{generate, Fixture, FixtureParams};
