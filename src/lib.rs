//! Tablesmith: build ASCII and Unicode tables in an interactive session
//!
//! [`core::TableState`] holds the table and renders it, the
//! [`command::CommandProcessor`] turns input lines into table operations,
//! and [`cli`] drives the terminal session around them.

pub mod cli;
pub mod command;
pub mod core;
