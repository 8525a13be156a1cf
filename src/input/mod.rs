//! Input adapters for the texture viewer.
//!
//! This module contains adapters that receive input from the command line
//! and the windowing system and translate them into viewer operations.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
