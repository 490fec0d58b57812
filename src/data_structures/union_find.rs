use crate::{Error, Result};

/// Disjoint sets over element ids `1..=size`, with weighted union and path compression.
///
/// Each slot holds either the parent's id, or `-(set size)` when the element is a root.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parents: Vec<isize>,
}

impl UnionFind {
    /// Creates `size` singleton sets
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyUnionFind);
        }
        Ok(UnionFind {
            parents: vec![-1; size + 1],
        })
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parents.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self, x: usize) -> Result<()> {
        if x == 0 || x > self.len() {
            Err(Error::InvalidVertex(x))
        } else {
            Ok(())
        }
    }

    /// Returns the root of the set containing `x`, pointing every node on the way at it
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    fn find_root(&mut self, x: usize) -> usize {
        if self.parents[x] < 0 {
            return x;
        }
        let root = self.find_root(self.parents[x] as usize);
        self.parents[x] = root as isize;
        root
    }

    /// Merges the sets holding `x` and `y`, hanging the smaller under the larger.
    ///
    /// Returns false when both were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }

        let combined = self.parents[root_x] + self.parents[root_y];
        // Sizes are negative: the more negative root is the larger set.
        if self.parents[root_x] <= self.parents[root_y] {
            self.parents[root_y] = root_x as isize;
            self.parents[root_x] = combined;
        } else {
            self.parents[root_x] = root_y as isize;
            self.parents[root_y] = combined;
        }
        Ok(true)
    }

    /// Returns true when `x` and `y` are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the size of the set holding `x`
    pub fn set_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok((-self.parents[root]) as usize)
    }

    /// Returns the number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.parents[1..].iter().filter(|&&p| p < 0).count()
    }
}
