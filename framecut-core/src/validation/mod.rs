//! Input validation run before any piece is packed.

mod validate;

pub use validate::validate;
