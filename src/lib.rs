// src/lib.rs
// project-memory - SessionStart hook summarizing tracked project features

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod memory;

pub use error::{MemoryError, Result};
