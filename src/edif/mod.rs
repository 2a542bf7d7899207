//! Streaming reader for EDIF 2.0.0 netlists.
//!
//! EDIF is a fully parenthesized, LISP-like text format. Keywords are
//! case-insensitive; identifiers keep their case. This module recognizes
//! the netlist subset of the language in a single pass and reports each
//! construct to an [`EdifVisitor`] instead of building a document tree.
//!
//! # Grammar Overview
//!
//! ```text
//! document   = '(' 'edif' name header* (library | external)* design* ')'
//! header     = '(' 'edifVersion' integer integer integer ')'
//!            | '(' 'edifLevel' integer ')'
//!            | '(' 'keywordMap' ... ')' | '(' 'status' ... ')'
//! library    = '(' ('library' | 'external') name (edifLevel)? (technology)? cell* ')'
//! cell       = '(' 'cell' name (cellType)? view* property* ')'
//! cellType   = '(' 'cellType' ('generic' | 'tie' | 'ripper') ')'
//! view       = '(' 'view' name (viewType)? (interface)? (contents)? property* ')'
//! viewType   = '(' 'viewType' ('netlist' | 'schematic' | ...) ')'
//! interface  = '(' 'interface' port* ')'
//! port       = '(' 'port' portName (direction)? property* ')'
//! direction  = '(' 'direction' ('input' | 'output' | 'inout') ')'
//! contents   = '(' 'contents' (instance | net)* ')'
//! instance   = '(' 'instance' portName (viewRef | cellRef) property* ')'
//! net        = '(' 'net' portName '(' 'joined' portRef* ')' property* ')'
//! portRef    = '(' 'portRef' (name | member) ('(' 'instanceRef' name ')')? ')'
//! design     = '(' 'design' name cellRef ')'
//!
//! name       = identifier | '(' 'rename' identifier string ')'
//! portName   = name | '(' 'array' name integer+ ')'
//! member     = '(' 'member' name integer+ ')'
//! ```
//!
//! Forms such as `status`, `technology` or `userData` are accepted with any
//! balanced content and skipped.
//!
//! # Example
//!
//! ```text
//! (edif top
//!   (edifVersion 2 0 0)
//!   (library work
//!     (cell top (cellType GENERIC)
//!       (view netlist (viewType NETLIST)
//!         (interface (port a (direction INPUT)))
//!         (contents
//!           (instance u0 (viewRef netlist (cellRef BUF (libraryRef prims))))
//!           (net a (joined (portRef a) (portRef I (instanceRef u0)))))))))
//! ```

mod keywords;
mod lexer;
mod parser;
mod reader;
mod stats;
mod types;
mod visitor;

pub use keywords::{CellType, Direction, Keyword, ValueTable, ViewType};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use reader::{open_source, EdifReader, ReadStatus};
pub use stats::NetlistStats;
pub use types::*;
pub use visitor::{EdifVisitor, NullVisitor};

use crate::error::{EdifError, Result};

/// Parse EDIF text, reporting constructs to `visitor`.
pub fn parse_str<V: EdifVisitor + ?Sized>(input: &str, visitor: &mut V) -> Result<()> {
    let lexer = Lexer::from_text(input);
    let mut parser = Parser::new(lexer);
    parser.parse(visitor)
}

/// Parse an EDIF file, reporting constructs to `visitor`.
///
/// Unlike [`EdifReader::read`], an unopenable file is an error here.
pub fn parse_file<V: EdifVisitor + ?Sized>(path: &std::path::Path, visitor: &mut V) -> Result<()> {
    let file = std::fs::File::open(path).map_err(|e| EdifError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut parser = Parser::new(Lexer::from_reader(file));
    parser.parse(visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("nope.edf"), &mut NullVisitor).unwrap_err();
        assert!(matches!(err, EdifError::FileReadError { .. }));
    }

    #[test]
    fn test_parse_str_syntax_check() {
        assert!(parse_str("(edif t (edifVersion 2 0 0))", &mut NullVisitor).is_ok());
        assert!(parse_str("(edif t (edifVersion 2 0 0)", &mut NullVisitor).is_err());
    }
}
