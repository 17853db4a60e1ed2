//! Fixed-capacity sample statistics and versioned-docs build tooling.
//!
//! Two independent halves share this crate, mirroring the project it
//! supports: [`buffer`] and [`stats`] implement a ring-buffered sample
//! window with fixed-point statistics for FPU-less callers, and
//! [`doctools`] holds the helpers the documentation pipeline shells out
//! to (Doxygen pre-pass, version-selector injection, post-build run).

#![deny(unused_must_use)]

pub mod buffer;
pub mod doctools;
pub mod error;
pub mod stats;

pub use buffer::SampleBuffer;
pub use error::{Error, Result};
pub use stats::{IntSample, Sample};
