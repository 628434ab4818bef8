//! Named adjacency matrix rendering

use ndarray::ArrayView2;
use std::fmt;

/// Adjacency matrix with vertex names along the top and left edges
pub struct AdjacencyTable<'a> {
    names: Vec<&'a str>,
    adjacency: ArrayView2<'a, u8>,
}

impl<'a> AdjacencyTable<'a> {
    pub fn new(names: Vec<&'a str>, adjacency: ArrayView2<'a, u8>) -> Self {
        AdjacencyTable { names, adjacency }
    }

    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    /// One row of 0/1 cells per vertex
    pub fn rows(&self) -> impl Iterator<Item = (&'a str, Vec<u8>)> + '_ {
        self.names
            .iter()
            .zip(self.adjacency.rows())
            .map(|(&name, row)| (name, row.to_vec()))
    }
}

impl fmt::Display for AdjacencyTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.names.iter().map(|n| n.len()).max().unwrap_or(1);

        write!(f, "{:width$}", "", width = width)?;
        for name in &self.names {
            write!(f, " {:>width$}", name, width = width)?;
        }
        writeln!(f)?;

        for (name, row) in self.rows() {
            write!(f, "{:width$}", name, width = width)?;
            for cell in row {
                write!(f, " {:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_render() {
        let adjacency = arr2(&[[0u8, 1], [1, 0]]);
        let table = AdjacencyTable::new(vec!["A", "B"], adjacency.view());
        assert_eq!(table.to_string(), "  A B\nA 0 1\nB 1 0\n");
    }
}
