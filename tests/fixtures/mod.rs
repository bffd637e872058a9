//! Test fixtures for tripmap.
//!
//! Provides real-world locations and multi-stop trips for codec and viewport
//! tests.

pub mod locations;

pub use locations::*;
