//! Summary statistics for EDIF netlists, gathered in one streaming pass.

use std::collections::BTreeMap;
use std::fmt;

use super::types::{Design, Instance, Net, Port, Property};
use super::visitor::EdifVisitor;

/// Construct counts for one or more parsed netlists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NetlistStats {
    pub edif_version: Option<(i64, i64, i64)>,
    pub libraries: usize,
    pub external_libraries: usize,
    pub cells: usize,
    pub views: usize,
    pub interfaces: usize,
    pub ports: usize,
    pub instances: usize,
    pub nets: usize,
    /// Port references joined by all nets
    pub connections: usize,
    pub properties: usize,
    pub comments: usize,
    pub designs: usize,
    /// Instance count per referenced cell name
    pub cell_counts: BTreeMap<String, usize>,
}

impl NetlistStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Referenced cells, most used first.
    pub fn top_cells(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut cells: Vec<(&str, usize)> = self
            .cell_counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        cells.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        cells.truncate(limit);
        cells
    }
}

impl EdifVisitor for NetlistStats {
    fn visit_edif_version(&mut self, major: i64, minor: i64, patch: i64) {
        self.edif_version = Some((major, minor, patch));
    }

    fn visit_library(&mut self, _name: String, external: bool) {
        if external {
            self.external_libraries += 1;
        } else {
            self.libraries += 1;
        }
    }

    fn visit_module(&mut self, _name: String) {
        self.cells += 1;
    }

    fn visit_view(&mut self, _name: String) {
        self.views += 1;
    }

    fn visit_interface(&mut self) {
        self.interfaces += 1;
    }

    fn visit_port(&mut self, _port: Port) {
        self.ports += 1;
    }

    fn visit_instance(&mut self, instance: Instance) {
        self.instances += 1;
        if let Some(cell) = instance.cell() {
            *self.cell_counts.entry(cell.name.clone()).or_insert(0) += 1;
        }
    }

    fn visit_net(&mut self, net: Net) {
        self.nets += 1;
        self.connections += net.joined.len();
    }

    fn visit_property(&mut self, _property: Property) {
        self.properties += 1;
    }

    fn visit_comment(&mut self, _text: String) {
        self.comments += 1;
    }

    fn visit_design(&mut self, _design: Design) {
        self.designs += 1;
    }
}

impl fmt::Display for NetlistStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((major, minor, patch)) = self.edif_version {
            writeln!(f, "edif version: {}.{}.{}", major, minor, patch)?;
        }
        writeln!(
            f,
            "libraries: {} ({} external)",
            self.libraries + self.external_libraries,
            self.external_libraries
        )?;
        writeln!(f, "cells: {}", self.cells)?;
        writeln!(f, "views: {}", self.views)?;
        writeln!(f, "ports: {}", self.ports)?;
        writeln!(f, "instances: {}", self.instances)?;
        writeln!(f, "nets: {} ({} connections)", self.nets, self.connections)?;
        writeln!(f, "properties: {}", self.properties)?;
        for (name, count) in self.top_cells(10) {
            writeln!(f, "  {:>8}  {}", count, name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edif::parse_str;
    use pretty_assertions::assert_eq;

    /// A flat netlist with `n` LUT instances chained by `n + 1` nets.
    fn generate_netlist(n: usize) -> String {
        let mut text = String::from(
            "(edif chain (edifVersion 2 0 0) (edifLevel 0)\n\
             (external prims (edifLevel 0)\n\
             (cell LUT1 (cellType GENERIC) (view netlist (viewType NETLIST)\n\
             (interface (port I0 (direction INPUT)) (port O (direction OUTPUT))))))\n\
             (library work (edifLevel 0)\n\
             (cell chain (cellType GENERIC) (view netlist (viewType NETLIST)\n\
             (interface (port din (direction INPUT)) (port dout (direction OUTPUT)))\n\
             (contents\n",
        );
        for i in 0..n {
            text.push_str(&format!(
                "(instance (rename u_{i} \"u[{i}]\") (viewRef netlist (cellRef LUT1 (libraryRef prims)))\n\
                 (property INIT (string \"2'h1\")))\n"
            ));
        }
        text.push_str("(net din (joined (portRef din) (portRef I0 (instanceRef u_0))))\n");
        for i in 1..n {
            text.push_str(&format!(
                "(net n_{i} (joined (portRef O (instanceRef u_{prev})) (portRef I0 (instanceRef u_{i}))))\n",
                prev = i - 1
            ));
        }
        text.push_str(&format!(
            "(net dout (joined (portRef O (instanceRef u_{last})) (portRef dout)))\n",
            last = n - 1
        ));
        text.push_str(")))) (design chain (cellRef chain (libraryRef work))))\n");
        text
    }

    fn count_forms(text: &str, keyword: &str) -> usize {
        text.to_ascii_lowercase().matches(&format!("({} ", keyword)).count()
    }

    #[test]
    fn test_stats_match_source_form_counts() {
        let text = generate_netlist(5000);
        let mut stats = NetlistStats::new();
        parse_str(&text, &mut stats).unwrap();

        assert_eq!(stats.instances, count_forms(&text, "instance"));
        assert_eq!(stats.nets, count_forms(&text, "net"));
        assert_eq!(stats.ports, count_forms(&text, "port"));
        assert_eq!(stats.cells, count_forms(&text, "cell"));
        assert_eq!(stats.properties, count_forms(&text, "property"));
        assert_eq!(stats.instances, 5000);
        assert_eq!(stats.nets, 5001);
        assert_eq!(stats.connections, 2 * 5001);
        assert_eq!(stats.libraries, 1);
        assert_eq!(stats.external_libraries, 1);
        assert_eq!(stats.designs, 1);
        assert_eq!(stats.edif_version, Some((2, 0, 0)));
        assert_eq!(stats.top_cells(3), vec![("LUT1", 5000)]);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = NetlistStats::new();
        parse_str(&generate_netlist(2), &mut stats).unwrap();
        let report = stats.to_string();
        assert!(report.contains("instances: 2\n"), "{}", report);
        assert!(report.contains("nets: 3 (6 connections)\n"), "{}", report);
        assert!(report.contains("libraries: 2 (1 external)\n"), "{}", report);
    }
}
