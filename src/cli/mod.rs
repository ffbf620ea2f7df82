//! CLI module - Command-line interface for the series API
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Series API - CRUD service for a database of TV series
#[derive(Parser)]
#[command(name = "series-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "web")]
    Serve,

    /// List all stored series
    #[command(alias = "ls", alias = "l")]
    List,

    /// Print the OpenAPI document as JSON
    Openapi,

    /// Create default config file
    Init,
}

pub use commands::*;
