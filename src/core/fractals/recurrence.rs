use rayon::prelude::*;
use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::grid::{ComplexGrid, Grid, Shape};

/// The `c` of `z ↦ z² + c`, fixed for a whole orbit.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// One constant per element, same shape as the iterate state.
    Field(ComplexGrid),
    /// A single constant broadcast to every element.
    Scalar(Complex),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    ShapeMismatch { initial: Shape, constant: Shape },
}

impl fmt::Display for RecurrenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { initial, constant } => {
                write!(
                    f,
                    "cannot broadcast constant of shape {} against initial values of shape {}",
                    constant, initial
                )
            }
        }
    }
}

impl Error for RecurrenceError {}

#[inline]
#[must_use]
pub fn step(z: Complex, c: Complex) -> Complex {
    z * z + c
}

/// Orbits of `z ↦ z² + c` over a whole grid.
///
/// Pulling from the recurrence first yields the initial grid unchanged, and
/// every later pull applies one step element-wise. The sequence is infinite
/// and cannot be rewound. Only the current iterate is kept.
#[derive(Debug, Clone)]
pub struct Recurrence {
    state: ComplexGrid,
    constant: Constant,
    started: bool,
}

impl Recurrence {
    pub fn new(initial: ComplexGrid, constant: Constant) -> Result<Self, RecurrenceError> {
        if let Constant::Field(field) = &constant {
            if field.shape() != initial.shape() {
                return Err(RecurrenceError::ShapeMismatch {
                    initial: initial.shape(),
                    constant: field.shape(),
                });
            }
        }

        Ok(Self {
            state: initial,
            constant,
            started: false,
        })
    }

    /// Mandelbrot orbits: every orbit starts at zero, `c` is the grid itself.
    #[must_use]
    pub fn mandelbrot(c: ComplexGrid) -> Self {
        Self {
            state: Grid::filled(c.shape(), Complex::ZERO),
            constant: Constant::Field(c),
            started: false,
        }
    }

    /// Julia orbits: the grid holds the starting points, `c` is shared.
    #[must_use]
    pub fn julia(z: ComplexGrid, c: Complex) -> Self {
        Self {
            state: z,
            constant: Constant::Scalar(c),
            started: false,
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.state.shape()
    }

    pub fn advance(&mut self) {
        let state = self.state.as_mut_slice();

        match &self.constant {
            Constant::Scalar(c) => {
                let c = *c;
                state.par_iter_mut().for_each(|z| *z = step(*z, c));
            }
            Constant::Field(field) => {
                state
                    .par_iter_mut()
                    .zip(field.as_slice().par_iter())
                    .for_each(|(z, &c)| *z = step(*z, c));
            }
        }
    }

    /// Pulls the next iterate without copying it out.
    pub fn next_iterate(&mut self) -> &ComplexGrid {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }

        &self.state
    }
}

impl Iterator for Recurrence {
    type Item = ComplexGrid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_iterate().clone())
    }
}
