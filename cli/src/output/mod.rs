//! Rendering of the resolved configuration for the terminal

pub mod formatters;

pub use formatters::{render, OutputFormat};
