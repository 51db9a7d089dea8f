//! Record transform helpers.
//!
//! Standalone single-pass transforms over loosely-shaped JSON records:
//! input shape in, transformed shape out. Nothing here holds state.

pub mod colors;
pub mod records;

pub use colors::*;
pub use records::*;
