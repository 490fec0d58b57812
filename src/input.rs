//! Line-oriented edge-list format.
//!
//! ```text
//! 7 1        vertex count, source id
//! 1 2 2      from, to, weight
//! ...
//! 0 0 0      terminator
//! ```

use std::io::{BufRead, Write};

use log::{debug, warn};
use num_traits::NumCast;

use crate::graph::{UndirectedGraph, Weight};
use crate::{Error, Result};

/// A parsed edge list, ready to be turned into a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub source: usize,
    /// `(from, to, weight)` in input order
    pub edges: Vec<(usize, usize, u64)>,
}

impl EdgeList {
    pub fn new(vertex_count: usize, source: usize) -> Self {
        EdgeList {
            vertex_count,
            source,
            edges: Vec::new(),
        }
    }

    /// Reads the header line and edge lines up to the `0 0 0` terminator.
    ///
    /// Blank lines are skipped. Input that ends without the terminator is accepted.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|text| (index + 1, text)));

        let mut list = loop {
            let (number, line) = match lines.next() {
                Some(item) => item?,
                None => {
                    return Err(Error::Parse {
                        line: 1,
                        message: "missing header line".to_string(),
                    })
                }
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            let [count, source] = parse_fields::<2>(&fields, number)?;
            break EdgeList::new(
                to_id(count, number, "vertex count")?,
                to_id(source, number, "source")?,
            );
        };

        for item in lines {
            let (number, line) = item?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            let [from, to, weight] = parse_fields::<3>(&fields, number)?;
            if from == 0 && to == 0 && weight == 0 {
                debug!("edge list terminated on line {} after {} edges", number, list.edges.len());
                return Ok(list);
            }
            if weight < 0 {
                return Err(Error::NegativeWeight(weight));
            }
            list.edges.push((
                to_id(from, number, "vertex")?,
                to_id(to, number, "vertex")?,
                weight as u64,
            ));
        }

        warn!("edge list ended without the 0 0 0 terminator");
        Ok(list)
    }

    /// Parses an edge list held in memory
    pub fn parse_str(text: &str) -> Result<Self> {
        EdgeList::parse(text.as_bytes())
    }

    /// Builds the graph by adding the edges in input order
    pub fn build<W: Weight>(&self) -> Result<UndirectedGraph<W>> {
        let mut graph = UndirectedGraph::new(self.vertex_count, self.source)?;
        for &(from, to, weight) in &self.edges {
            let weight = <W as NumCast>::from(weight).ok_or(Error::WeightOverflow(weight))?;
            graph.add_edge(from, to, weight)?;
        }
        debug!(
            "built graph with {} vertices and {} edges from source {}",
            self.vertex_count,
            self.edges.len(),
            self.source
        );
        Ok(graph)
    }

    /// Writes the list in the format accepted by [`EdgeList::parse`], terminator included
    pub fn write_to<O: Write>(&self, out: &mut O) -> Result<()> {
        writeln!(out, "{} {}", self.vertex_count, self.source)?;
        for (from, to, weight) in &self.edges {
            writeln!(out, "{} {} {}", from, to, weight)?;
        }
        writeln!(out, "0 0 0")?;
        Ok(())
    }
}

fn parse_fields<const N: usize>(fields: &[&str], line: usize) -> Result<[i64; N]> {
    if fields.len() != N {
        return Err(Error::Parse {
            line,
            message: format!("expected {} fields, found {}", N, fields.len()),
        });
    }

    let mut values = [0i64; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field.parse().map_err(|_| Error::Parse {
            line,
            message: format!("'{}' is not an integer", field),
        })?;
    }
    Ok(values)
}

fn to_id(value: i64, line: usize, what: &str) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::Parse {
        line,
        message: format!("{} must not be negative, found {}", what, value),
    })
}
