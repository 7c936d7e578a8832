//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - gen: Generate a practice set (also the default)
//! - angle: Answer the question for one time
//! - draw: Write a clock diagram
//! - config init: Initialize configuration file
pub mod angle;
pub mod config;
pub mod draw;
pub mod gen;
