//! Sample documents bundled with the crate.

/// A headline and a close button.
pub const SIMPLE: &str = include_str!("demos/simple.json");

/// A product page with cards, a button row and reviews.
pub const COMPLEX: &str = include_str!("demos/complex.json");
