//! I/O helpers for exporting engine results.

pub mod csv;

pub use csv::*;
