//! Reserved words and enumerated keyword arguments.
//!
//! Lookup is table-driven and case-insensitive. The tables are immutable
//! process-wide constants, safe to share between independent lexers.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

macro_rules! keyword_table {
    ($($variant:ident => $text:literal,)+) => {
        /// A reserved EDIF word, recognized in the head position of a form.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant,)+
        }

        impl Keyword {
            /// Every keyword, in table order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)+];

            /// Canonical (lower-case) spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)+
                }
            }
        }
    };
}

keyword_table! {
    Array => "array",
    Author => "author",
    Boolean => "boolean",
    Cell => "cell",
    CellRef => "cellref",
    CellType => "celltype",
    Comment => "comment",
    Contents => "contents",
    Design => "design",
    Designator => "designator",
    Direction => "direction",
    Display => "display",
    E => "e",
    Edif => "edif",
    EdifLevel => "ediflevel",
    EdifVersion => "edifversion",
    External => "external",
    False => "false",
    GlobalPortRef => "globalportref",
    Instance => "instance",
    InstanceRef => "instanceref",
    Integer => "integer",
    Interface => "interface",
    Joined => "joined",
    KeywordLevel => "keywordlevel",
    KeywordMap => "keywordmap",
    Library => "library",
    LibraryRef => "libraryref",
    ListOfNets => "listofnets",
    ListOfPorts => "listofports",
    Member => "member",
    Name => "name",
    Net => "net",
    NetBundle => "netbundle",
    Number => "number",
    NumberDefinition => "numberdefinition",
    Owner => "owner",
    Port => "port",
    PortBundle => "portbundle",
    PortInstance => "portinstance",
    PortList => "portlist",
    PortRef => "portref",
    Program => "program",
    Property => "property",
    Rename => "rename",
    Status => "status",
    String => "string",
    Technology => "technology",
    Timestamp => "timestamp",
    True => "true",
    Unit => "unit",
    UserData => "userdata",
    Version => "version",
    View => "view",
    ViewRef => "viewref",
    ViewType => "viewtype",
    Written => "written",
}

static KEYWORDS: Lazy<HashMap<&'static str, Keyword>> =
    Lazy::new(|| Keyword::ALL.iter().map(|&kw| (kw.as_str(), kw)).collect());

impl Keyword {
    /// Look up a word in the reserved table, ignoring case.
    pub fn lookup(word: &str) -> Option<Keyword> {
        KEYWORDS.get(word.to_ascii_lowercase().as_str()).copied()
    }

    /// The enumerated-argument table this keyword's value is drawn from.
    pub fn value_table(self) -> Option<ValueTable> {
        match self {
            Keyword::CellType => Some(ValueTable::CellType),
            Keyword::ViewType => Some(ValueTable::ViewType),
            Keyword::Direction => Some(ValueTable::Direction),
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `celltype` argument values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Generic,
    Tie,
    Ripper,
}

const CELL_TYPES: &[(&str, CellType)] = &[
    ("generic", CellType::Generic),
    ("tie", CellType::Tie),
    ("ripper", CellType::Ripper),
];

/// `viewtype` argument values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    Behavior,
    Document,
    Graphic,
    LogicModel,
    MaskLayout,
    Netlist,
    PcbLayout,
    Schematic,
    Stranger,
    Symbolic,
}

const VIEW_TYPES: &[(&str, ViewType)] = &[
    ("behavior", ViewType::Behavior),
    ("document", ViewType::Document),
    ("graphic", ViewType::Graphic),
    ("logicmodel", ViewType::LogicModel),
    ("masklayout", ViewType::MaskLayout),
    ("netlist", ViewType::Netlist),
    ("pcblayout", ViewType::PcbLayout),
    ("schematic", ViewType::Schematic),
    ("stranger", ViewType::Stranger),
    ("symbolic", ViewType::Symbolic),
];

/// `direction` argument values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
    Inout,
}

const DIRECTIONS: &[(&str, Direction)] = &[
    ("input", Direction::Input),
    ("output", Direction::Output),
    ("inout", Direction::Inout),
];

fn find<T: Copy>(table: &[(&'static str, T)], word: &str) -> Option<T> {
    table
        .iter()
        .find(|(text, _)| text.eq_ignore_ascii_case(word))
        .map(|&(_, value)| value)
}

fn name_of<T: Copy + PartialEq>(table: &[(&'static str, T)], value: T) -> &'static str {
    table
        .iter()
        .find(|(_, v)| *v == value)
        .map(|&(text, _)| text)
        .unwrap_or("?")
}

impl CellType {
    pub fn lookup(word: &str) -> Option<Self> {
        find(CELL_TYPES, word)
    }

    pub fn as_str(self) -> &'static str {
        name_of(CELL_TYPES, self)
    }
}

impl ViewType {
    pub fn lookup(word: &str) -> Option<Self> {
        find(VIEW_TYPES, word)
    }

    pub fn as_str(self) -> &'static str {
        name_of(VIEW_TYPES, self)
    }
}

impl Direction {
    pub fn lookup(word: &str) -> Option<Self> {
        find(DIRECTIONS, word)
    }

    pub fn as_str(self) -> &'static str {
        name_of(DIRECTIONS, self)
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which closed enumeration an argument position expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTable {
    CellType,
    ViewType,
    Direction,
}

impl ValueTable {
    /// Human-readable list of accepted values, for diagnostics.
    pub fn expected(self) -> String {
        let names: Vec<&str> = match self {
            ValueTable::CellType => CELL_TYPES.iter().map(|(t, _)| *t).collect(),
            ValueTable::ViewType => VIEW_TYPES.iter().map(|(t, _)| *t).collect(),
            ValueTable::Direction => DIRECTIONS.iter().map(|(t, _)| *t).collect(),
        };
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_round_trips_through_lookup() {
        for &kw in Keyword::ALL {
            assert_eq!(Keyword::lookup(kw.as_str()), Some(kw));
            assert_eq!(Keyword::lookup(&kw.as_str().to_uppercase()), Some(kw));
        }
    }

    #[test]
    fn test_unknown_word_is_not_a_keyword() {
        assert_eq!(Keyword::lookup("LUT4"), None);
        assert_eq!(Keyword::lookup(""), None);
    }

    #[test]
    fn test_value_tables_ignore_case() {
        assert_eq!(CellType::lookup("GENERIC"), Some(CellType::Generic));
        assert_eq!(ViewType::lookup("NetList"), Some(ViewType::Netlist));
        assert_eq!(Direction::lookup("InOut"), Some(Direction::Inout));
        assert_eq!(Direction::lookup("sideways"), None);
        assert_eq!(Direction::Inout.as_str(), "inout");
        assert_eq!(ValueTable::Direction.expected(), "input, output, inout");
    }
}
