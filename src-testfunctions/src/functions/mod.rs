//! Benchmark function implementations organized by category
//!
//! - `unimodal`: single-valley functions (Rosenbrock)
//! - `multimodal`: functions with several local minima (Goldstein-Price,
//!   six-hump camelback, Rastrigin, Griewank, Shekel, Hartman, Hosaki)

pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use multimodal::*;
pub use unimodal::*;
