//! Values handed to an [`EdifVisitor`](super::EdifVisitor).
//!
//! None of these are retained by the parser; each is built from the tokens
//! of one form and moved into the visitor call that reports it.

use super::keywords::Direction;

/// A port declared in a view's interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    /// Port identifier
    pub name: String,
    /// Original name from `(rename id "original")`
    pub original_name: Option<String>,
    /// Bus width from `(array name width)`
    pub width: Option<u32>,
    /// Declared direction, if any
    pub direction: Option<Direction>,
}

/// A cell instance inside a view's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub name: String,
    pub original_name: Option<String>,
    pub width: Option<u32>,
    /// Instantiated view, when given with `viewref`
    pub view_ref: Option<ViewRef>,
    /// Instantiated cell, when given directly with `cellref`
    pub cell_ref: Option<CellRef>,
}

impl Instance {
    /// The referenced cell, whichever way the instance names it.
    pub fn cell(&self) -> Option<&CellRef> {
        self.cell_ref
            .as_ref()
            .or_else(|| self.view_ref.as_ref().and_then(|v| v.cell.as_ref()))
    }
}

/// A net and the port references it joins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net {
    pub name: String,
    pub original_name: Option<String>,
    pub width: Option<u32>,
    pub joined: Vec<PortRef>,
}

/// `(cellref name (libraryref lib))`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub name: String,
    pub library: Option<String>,
}

/// `(viewref name (cellref ...))`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRef {
    pub name: String,
    pub cell: Option<CellRef>,
}

/// `(portref name (instanceref inst))`, or `(portref (member name i) ...)`
/// for one bit of a bus port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRef {
    pub port: String,
    /// Member indices when the reference selects bits of an array port
    pub member: Vec<i64>,
    /// Owning instance; `None` for a port of the enclosing view
    pub instance: Option<String>,
    /// Member indices from `(instanceref (member inst i))` for one element
    /// of an instance array
    pub instance_member: Vec<i64>,
}

/// A named property attached to the enclosing construct.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub original_name: Option<String>,
    pub value: Option<PropertyValue>,
    pub owner: Option<String>,
}

/// Typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Integer(i64),
    String(String),
    Boolean(bool),
    Number(ScaledInteger),
}

/// EDIF number: `mantissa * 10^exponent`, written `(e mantissa exponent)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledInteger {
    pub mantissa: i64,
    pub exponent: i64,
}

impl ScaledInteger {
    pub fn to_f64(self) -> f64 {
        let exponent = self.exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        self.mantissa as f64 * 10f64.powi(exponent)
    }
}

impl From<i64> for ScaledInteger {
    fn from(mantissa: i64) -> Self {
        Self {
            mantissa,
            exponent: 0,
        }
    }
}

/// The top-level design declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Design {
    pub name: String,
    pub cell_ref: Option<CellRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scaled_integer_value() {
        let n = ScaledInteger {
            mantissa: 25,
            exponent: -3,
        };
        assert_relative_eq!(n.to_f64(), 0.025, epsilon = 1e-12);
        assert_relative_eq!(ScaledInteger::from(7).to_f64(), 7.0);
    }

    #[test]
    fn test_instance_cell_through_view_ref() {
        let inst = Instance {
            name: "u1".to_string(),
            original_name: None,
            width: None,
            view_ref: Some(ViewRef {
                name: "netlist".to_string(),
                cell: Some(CellRef {
                    name: "LUT4".to_string(),
                    library: Some("hdi_primitives".to_string()),
                }),
            }),
            cell_ref: None,
        };
        assert_eq!(inst.cell().map(|c| c.name.as_str()), Some("LUT4"));
    }
}
