//! Command-line interface for the Halberd pipeline.

pub mod args;
pub mod commands;
pub mod output;
