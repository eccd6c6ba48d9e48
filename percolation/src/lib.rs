#![forbid(unsafe_code)]

use quick_union::WeightedQuickUnion;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimension must be positive")]
    InvalidDimension,

    #[error("site ({row}, {column}) is out of range for a {dimension}x{dimension} grid")]
    OutOfRange {
        row: usize,
        column: usize,
        dimension: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////

/// An N-by-N grid of sites, each either open or blocked, that answers
/// connectivity queries without rescanning the grid.
///
/// Sites are addressed by 1-based `(row, column)` coordinates. Next to the
/// N² site entries, the connectivity structure holds two virtual nodes: one
/// standing for "any open site in row 1" and one for "any open site in
/// row N". A boundary-row site is attached to its virtual node at the moment
/// it opens, which reduces the percolation test to a single pair query.
#[derive(Debug)]
pub struct Percolation {
    dimension: usize,
    sites: Vec<bool>,
    open_sites: usize,
    connectivity: WeightedQuickUnion,
}

impl Percolation {
    /// Creates a grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// `Error::InvalidDimension` if `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::InvalidDimension);
        }

        let site_count = dimension * dimension;

        Ok(Self {
            dimension,
            sites: vec![false; site_count],
            open_sites: 0,
            connectivity: WeightedQuickUnion::new(site_count + 2),
        })
    }

    /// Returns the grid dimension N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of open sites.
    pub fn open_sites(&self) -> usize {
        self.open_sites
    }

    /// Opens the site at `(row, column)` and connects it to its open
    /// neighbours. Opening an already open site changes nothing.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= dimension.
    /// * `column` - must be >= 1 and <= dimension.
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` if either coordinate is outside the grid.
    pub fn open(&mut self, row: usize, column: usize) -> Result<()> {
        let index = self.site_index(row, column)?;

        if self.sites[index] {
            return Ok(());
        }

        self.sites[index] = true;
        self.open_sites += 1;

        if row > 1 && self.sites[index - self.dimension] {
            self.connectivity.union(index, index - self.dimension);
        }
        if row < self.dimension && self.sites[index + self.dimension] {
            self.connectivity.union(index, index + self.dimension);
        }
        if column > 1 && self.sites[index - 1] {
            self.connectivity.union(index, index - 1);
        }
        if column < self.dimension && self.sites[index + 1] {
            self.connectivity.union(index, index + 1);
        }

        if row == 1 {
            self.connectivity.union(index, self.virtual_top());
        }
        if row == self.dimension {
            self.connectivity.union(index, self.virtual_bottom());
        }

        Ok(())
    }

    /// Returns `true` if the site at `(row, column)` is open.
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` if either coordinate is outside the grid.
    pub fn is_open(&self, row: usize, column: usize) -> Result<bool> {
        let index = self.site_index(row, column)?;

        Ok(self.sites[index])
    }

    /// Returns `true` if the site at `(row, column)` is connected to the top
    /// row through a path of open sites.
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` if either coordinate is outside the grid.
    pub fn is_full(&self, row: usize, column: usize) -> Result<bool> {
        let index = self.site_index(row, column)?;

        // A blocked site is never full, whatever the connectivity says.
        if !self.sites[index] {
            return Ok(false);
        }

        Ok(self.connectivity.connected(index, self.virtual_top()))
    }

    /// Returns `true` if an open path connects the top row to the bottom
    /// row.
    pub fn percolates(&self) -> bool {
        if self.dimension == 1 {
            return self.sites[0];
        }

        self.connectivity
            .connected(self.virtual_top(), self.virtual_bottom())
    }

    fn site_index(&self, row: usize, column: usize) -> Result<usize> {
        let range = 1..=self.dimension;

        if !range.contains(&row) || !range.contains(&column) {
            return Err(Error::OutOfRange {
                row,
                column,
                dimension: self.dimension,
            });
        }

        Ok(self.dimension * (row - 1) + (column - 1))
    }

    fn virtual_top(&self) -> usize {
        self.dimension * self.dimension
    }

    fn virtual_bottom(&self) -> usize {
        self.dimension * self.dimension + 1
    }
}

////////////////////////////////////////////////////////////////////////////////
