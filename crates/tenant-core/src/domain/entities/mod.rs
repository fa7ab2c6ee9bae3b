//! Domain entities.

mod app;

pub use app::*;
