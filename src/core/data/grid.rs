use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Rows by columns (H × W) of a 2-D grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    BoundsMismatch { shape: Shape, data_len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch { shape, data_len } => {
                write!(
                    f,
                    "grid of shape {} needs {} elements, got {}",
                    shape,
                    shape.len(),
                    data_len
                )
            }
        }
    }
}

impl Error for GridError {}

/// Row-major 2-D array.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    shape: Shape,
    data: Vec<T>,
}

pub type ComplexGrid = Grid<Complex>;
pub type MembershipGrid = Grid<bool>;

impl<T: Clone> Grid<T> {
    #[must_use]
    pub fn filled(shape: Shape, value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }
}

impl<T> Grid<T> {
    pub fn from_data(shape: Shape, data: Vec<T>) -> Result<Self, GridError> {
        if shape.len() != data.len() {
            return Err(GridError::BoundsMismatch {
                shape,
                data_len: data.len(),
            });
        }

        Ok(Self { shape, data })
    }

    #[must_use]
    pub fn from_fn(shape: Shape, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(shape.len());

        for row in 0..shape.rows {
            for col in 0..shape.cols {
                data.push(f(row, col));
            }
        }

        Self { shape, data }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }

        self.data.get(row * self.shape.cols + col)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on zero, an empty grid has no rows anyway
        self.data.chunks(self.shape.cols.max(1))
    }
}

impl MembershipGrid {
    #[must_use]
    pub fn count_members(&self) -> usize {
        self.data.iter().filter(|&&member| member).count()
    }
}
