//! Callback interface invoked by the parser.

use super::keywords::{CellType, ViewType};
use super::types::{Design, Instance, Net, Port, Property};

/// Receives constructs in document order as the parser recognizes them.
///
/// Every method defaults to a no-op, so an implementation overrides only
/// what it cares about. Container constructs are reported by a `visit_*`
/// call once their name is known and an `end_*` call at their closing
/// parenthesis; everything reported in between belongs to them. Leaf
/// constructs are reported once, complete, at their closing parenthesis.
///
/// ```ignore
/// struct CellNames(Vec<String>);
///
/// impl EdifVisitor for CellNames {
///     fn visit_module(&mut self, name: String) {
///         self.0.push(name);
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait EdifVisitor {
    /// `(edif name ...`
    fn visit_edif(&mut self, name: String) {}

    fn end_edif(&mut self) {}

    fn visit_edif_version(&mut self, major: i64, minor: i64, patch: i64) {}

    fn visit_edif_level(&mut self, level: i64) {}

    /// `(library name ...` or, with `external` set, `(external name ...`
    fn visit_library(&mut self, name: String, external: bool) {}

    fn end_library(&mut self) {}

    /// `(cell name ...`: a cell begins.
    fn visit_module(&mut self, name: String) {}

    fn visit_cell_type(&mut self, cell_type: CellType) {}

    fn end_module(&mut self) {}

    fn visit_view(&mut self, name: String) {}

    fn visit_view_type(&mut self, view_type: ViewType) {}

    fn end_view(&mut self) {}

    fn visit_interface(&mut self) {}

    fn end_interface(&mut self) {}

    fn visit_port(&mut self, port: Port) {}

    fn visit_contents(&mut self) {}

    fn end_contents(&mut self) {}

    fn visit_instance(&mut self, instance: Instance) {}

    fn visit_net(&mut self, net: Net) {}

    /// A property of the construct most recently reported. Properties of a
    /// port, instance, net, design or property follow that construct's own
    /// call, in document order.
    fn visit_property(&mut self, property: Property) {}

    fn visit_design(&mut self, design: Design) {}

    /// Text of a `(comment "...")` form, one call per string.
    fn visit_comment(&mut self, text: String) {}
}

impl<V: EdifVisitor + ?Sized> EdifVisitor for &mut V {
    fn visit_edif(&mut self, name: String) {
        (**self).visit_edif(name)
    }
    fn end_edif(&mut self) {
        (**self).end_edif()
    }
    fn visit_edif_version(&mut self, major: i64, minor: i64, patch: i64) {
        (**self).visit_edif_version(major, minor, patch)
    }
    fn visit_edif_level(&mut self, level: i64) {
        (**self).visit_edif_level(level)
    }
    fn visit_library(&mut self, name: String, external: bool) {
        (**self).visit_library(name, external)
    }
    fn end_library(&mut self) {
        (**self).end_library()
    }
    fn visit_module(&mut self, name: String) {
        (**self).visit_module(name)
    }
    fn visit_cell_type(&mut self, cell_type: CellType) {
        (**self).visit_cell_type(cell_type)
    }
    fn end_module(&mut self) {
        (**self).end_module()
    }
    fn visit_view(&mut self, name: String) {
        (**self).visit_view(name)
    }
    fn visit_view_type(&mut self, view_type: ViewType) {
        (**self).visit_view_type(view_type)
    }
    fn end_view(&mut self) {
        (**self).end_view()
    }
    fn visit_interface(&mut self) {
        (**self).visit_interface()
    }
    fn end_interface(&mut self) {
        (**self).end_interface()
    }
    fn visit_port(&mut self, port: Port) {
        (**self).visit_port(port)
    }
    fn visit_contents(&mut self) {
        (**self).visit_contents()
    }
    fn end_contents(&mut self) {
        (**self).end_contents()
    }
    fn visit_instance(&mut self, instance: Instance) {
        (**self).visit_instance(instance)
    }
    fn visit_net(&mut self, net: Net) {
        (**self).visit_net(net)
    }
    fn visit_property(&mut self, property: Property) {
        (**self).visit_property(property)
    }
    fn visit_design(&mut self, design: Design) {
        (**self).visit_design(design)
    }
    fn visit_comment(&mut self, text: String) {
        (**self).visit_comment(text)
    }
}

/// A visitor that ignores everything; useful for syntax checking.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisitor;

impl EdifVisitor for NullVisitor {}
