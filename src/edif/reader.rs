//! File-level entry point pairing one parser with one visitor.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use super::lexer::Lexer;
use super::parser::Parser;
use super::visitor::EdifVisitor;
use crate::error::{EdifError, Result};

/// Outcome of [`EdifReader::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    /// The file was opened and parsed completely
    Parsed,
    /// The file could not be opened or read
    Unreadable,
}

/// Reads EDIF files into a visitor.
///
/// Each reader owns its own lexer and parser. Use one reader per thread
/// when processing files in parallel.
pub struct EdifReader<V> {
    parser: Parser<'static>,
    visitor: V,
}

impl<V: EdifVisitor> EdifReader<V> {
    pub fn new(visitor: V) -> Self {
        Self {
            parser: Parser::new(Lexer::new()),
            visitor,
        }
    }

    pub fn set_debug_level(&mut self, level: u32) {
        self.parser.set_debug_level(level);
    }

    /// Parse the file at `path`.
    ///
    /// A file that cannot be opened or read is logged and reported as
    /// [`ReadStatus::Unreadable`] rather than as an error, so that a batch
    /// of files can carry on; the reader stays usable either way.
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<ReadStatus> {
        let path = path.as_ref();
        let source = match open_source(path) {
            Ok(source) => source,
            Err(e) => {
                log::error!("{}: no such file ({})", path.display(), e);
                return Ok(ReadStatus::Unreadable);
            }
        };

        log::info!("reading {}", path.display());
        match self.read_from(source) {
            Ok(()) => Ok(ReadStatus::Parsed),
            Err(EdifError::Io(e)) => {
                log::error!("{}: read failed ({})", path.display(), e);
                Ok(ReadStatus::Unreadable)
            }
            Err(e) => Err(e),
        }
    }

    /// Parse one document from an arbitrary byte source.
    pub fn read_from<R: Read + 'static>(&mut self, source: R) -> Result<()> {
        self.parser.lexer_mut().switch_streams(source, None);
        let result = self.parser.parse(&mut self.visitor);
        // Drop the source now rather than at the next read
        self.parser.lexer_mut().switch_streams(std::io::empty(), None);
        result
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

/// Open `path` for parsing, failing unless its first read succeeds.
///
/// Paths that open but cannot be read, such as directories, are caught
/// here instead of partway through a parse.
pub fn open_source(path: &Path) -> io::Result<BufReader<File>> {
    let mut source = BufReader::new(File::open(path)?);
    source.fill_buf()?;
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edif::NetlistStats;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn netlist_file(instances: usize) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "(edif t (library work (cell top (cellType GENERIC) (view v (viewType NETLIST) (contents"
        )
        .unwrap();
        for i in 0..instances {
            write!(file, " (instance i{} (cellRef buf))", i).unwrap();
        }
        writeln!(file, ")))))").unwrap();
        file
    }

    #[test]
    fn test_read_parses_file() {
        let file = netlist_file(3);
        let mut reader = EdifReader::new(NetlistStats::new());
        assert_eq!(reader.read(file.path()).unwrap(), ReadStatus::Parsed);
        assert_eq!(reader.visitor().instances, 3);
        assert_eq!(reader.visitor().cell_counts.get("buf"), Some(&3));
    }

    #[test]
    fn test_read_missing_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.edf");
        let mut reader = EdifReader::new(NetlistStats::new());
        assert_eq!(reader.read(&missing).unwrap(), ReadStatus::Unreadable);
        assert_eq!(reader.visitor().instances, 0);

        let file = netlist_file(2);
        assert_eq!(reader.read(file.path()).unwrap(), ReadStatus::Parsed);
        assert_eq!(reader.visitor().instances, 2);
    }

    #[test]
    fn test_read_directory_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut reader = EdifReader::new(NetlistStats::new());
        assert_eq!(reader.read(dir.path()).unwrap(), ReadStatus::Unreadable);

        let file = netlist_file(1);
        assert_eq!(reader.read(file.path()).unwrap(), ReadStatus::Parsed);
        assert_eq!(reader.visitor().instances, 1);
    }

    #[test]
    fn test_open_source_reports_unreadable_paths() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_source(dir.path()).is_err());
        assert!(open_source(&dir.path().join("missing.edf")).is_err());
        assert!(open_source(netlist_file(1).path()).is_ok());
    }

    #[test]
    fn test_batch_read_mixed_paths() {
        let dir = tempfile::tempdir().unwrap();
        let good: Vec<NamedTempFile> = (1..=3).map(netlist_file).collect();
        let paths = vec![
            dir.path().join("a.edf"),
            good[0].path().to_path_buf(),
            dir.path().join("b.edf"),
            good[1].path().to_path_buf(),
            good[2].path().to_path_buf(),
        ];

        let mut reader = EdifReader::new(NetlistStats::new());
        let statuses: Vec<ReadStatus> = paths.iter().map(|p| reader.read(p).unwrap()).collect();
        let unreadable = statuses.iter().filter(|s| **s == ReadStatus::Unreadable).count();
        assert_eq!(statuses.len(), 5);
        assert_eq!(unreadable, 2);
        assert_eq!(reader.into_visitor().instances, 1 + 2 + 3);
    }

    #[test]
    fn test_read_error_leaves_reader_usable() {
        let mut broken = NamedTempFile::new().unwrap();
        write!(broken, "(edif t (library work").unwrap();
        let good = netlist_file(1);

        let mut stats = NetlistStats::new();
        {
            let mut reader = EdifReader::new(&mut stats);
            assert!(reader.read(broken.path()).unwrap_err().is_syntax());
            assert_eq!(reader.read(good.path()).unwrap(), ReadStatus::Parsed);
        }
        assert_eq!(stats.instances, 1);
    }

    #[test]
    fn test_read_from_memory() {
        let mut reader = EdifReader::new(NetlistStats::new());
        reader.set_debug_level(1);
        reader.read_from(&b"(edif t (library l (cell c)))"[..]).unwrap();
        reader.visitor_mut().cells += 10;
        assert_eq!(reader.visitor().cells, 11);
    }
}
