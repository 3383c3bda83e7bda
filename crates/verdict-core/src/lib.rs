//! # Verdict Core
//!
//! Two small, independent utility facilities: emptiness classification over
//! heterogeneous value types, and an [`Outcome`] wrapper that represents the
//! result of a fallible operation as an explicit success-or-failure value,
//! with an adapter for async calls that guarantees cleanup on every exit
//! path.

pub mod empty;
pub mod outcome;

pub use empty::*;
pub use outcome::*;
