//! Analysis modules
//!
//! - Silence classification over decoded amplitudes
//! - Result types

pub mod result;
pub mod silence;
