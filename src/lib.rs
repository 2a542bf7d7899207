//! # EDIF Core
//!
//! A streaming reader for EDIF 2.0.0 netlists.
//!
//! This library provides:
//! - A lexer with case-insensitive, position-sensitive keyword recognition
//! - A non-recursive parser that validates the netlist subset of the grammar
//! - A visitor trait receiving cells, ports, instances and nets as they are read
//!
//! ## Architecture
//!
//! - [`edif`] - Lexer, parser, visitor interface and file reader
//! - [`error`] - Error types shared by every stage
//!
//! ## Usage
//!
//! ```no_run
//! use edif_core::edif::{EdifReader, NetlistStats, ReadStatus};
//!
//! let mut reader = EdifReader::new(NetlistStats::new());
//! if reader.read("design.edf")? == ReadStatus::Parsed {
//!     println!("{}", reader.visitor());
//! }
//! # Ok::<(), edif_core::EdifError>(())
//! ```
//!
//! Implement [`EdifVisitor`] to receive only the constructs you need; every
//! method has an empty default.

pub mod edif;
pub mod error;

// Re-export main types for convenience
pub use edif::{EdifReader, EdifVisitor, Lexer, Parser};
pub use error::{EdifError, Result};
