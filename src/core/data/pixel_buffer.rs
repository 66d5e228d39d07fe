use crate::core::data::colour::Colour;
use crate::core::data::grid::Shape;
use std::error::Error;
use std::fmt;

fn shape_to_buffer_size(shape: Shape) -> usize {
    shape.len() * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        row: usize,
        col: usize,
        shape: Shape,
    },
    BoundsMismatch {
        shape_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                shape_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "shape size {} does not match buffer size {}",
                    shape_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { row, col, shape } => {
                write!(
                    f,
                    "pixel at row:{}, col:{} outside of {} canvas",
                    row, col, shape
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed 8-bit RGB canvas, row-major, `rows x cols x 3` bytes.
#[derive(Debug)]
pub struct PixelBuffer {
    shape: Shape,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn filled(shape: Shape, colour: Colour) -> Self {
        let buffer = [colour.r, colour.g, colour.b].repeat(shape.len());

        Self { shape, buffer }
    }

    pub fn from_data(shape: Shape, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let shape_size = shape_to_buffer_size(shape);

        if shape_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                shape_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { shape, buffer })
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, row: usize, col: usize) -> Option<Colour> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }

        let index = (row * self.shape.cols + col) * 3;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, colour: Colour) -> Result<(), PixelBufferError> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return Err(PixelBufferError::PixelOutsideBounds {
                row,
                col,
                shape: self.shape,
            });
        }

        let index = (row * self.shape.cols + col) * 3;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}
