use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid::{ComplexGrid, Grid, Shape};
use crate::core::util::linspace::linspace;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SampleGridError {
    InvalidPixelSize { pixel_size: f64 },
    EmptyGrid { width: f64, height: f64, pixel_size: f64 },
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for SampleGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPixelSize { pixel_size } => {
                write!(f, "pixel size must be a positive finite number, got {}", pixel_size)
            }
            Self::EmptyGrid {
                width,
                height,
                pixel_size,
            } => {
                write!(
                    f,
                    "a {}x{} region sampled every {} yields an empty grid",
                    width, height, pixel_size
                )
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "a {}x{} grid is too large to allocate", rows, cols)
            }
        }
    }
}

impl Error for SampleGridError {}

/// Largest element count a sample grid may hold: a `Vec<Complex>` of this
/// length stays within the `isize::MAX` byte limit on allocations.
pub const MAX_GRID_ELEMENTS: usize = isize::MAX as usize / size_of::<Complex>();

/// Number of samples along each axis: the extent divided by the pixel size,
/// truncated.
pub fn grid_shape(region: ComplexRect, pixel_size: f64) -> Result<Shape, SampleGridError> {
    if !(pixel_size.is_finite() && pixel_size > 0.0) {
        return Err(SampleGridError::InvalidPixelSize { pixel_size });
    }

    // `as` saturates at usize::MAX, the product is checked below
    let cols = (region.width() / pixel_size) as usize;
    let rows = (region.height() / pixel_size) as usize;

    if rows == 0 || cols == 0 {
        return Err(SampleGridError::EmptyGrid {
            width: region.width(),
            height: region.height(),
            pixel_size,
        });
    }

    match rows.checked_mul(cols) {
        Some(len) if len <= MAX_GRID_ELEMENTS => Ok(Shape::new(rows, cols)),
        _ => Err(SampleGridError::TooLarge { rows, cols }),
    }
}

/// Samples `region` into a grid where element `(row, col)` is
/// `real[col] + i * imag[row]`.
///
/// Both axes run from the `min` corner to the `max` corner inclusive, so row
/// 0 holds the smallest imaginary part.
pub fn sample_grid(region: ComplexRect, pixel_size: f64) -> Result<ComplexGrid, SampleGridError> {
    let shape = grid_shape(region, pixel_size)?;
    let real = linspace(region.min().real, region.max().real, shape.cols);
    let imag = linspace(region.min().imag, region.max().imag, shape.rows);

    Ok(Grid::from_fn(shape, |row, col| Complex::new(real[col], imag[row])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(min: (f64, f64), max: (f64, f64)) -> ComplexRect {
        ComplexRect::new(Complex::new(min.0, min.1), Complex::new(max.0, max.1)).unwrap()
    }

    #[test]
    fn test_grid_shape_truncates() {
        let shape = grid_shape(region((-2.0, -1.0), (1.0, 1.0)), 0.7).unwrap();

        // 3 / 0.7 = 4.28..., 2 / 0.7 = 2.85...
        assert_eq!(shape, Shape::new(2, 4));
    }

    #[test]
    fn test_forty_by_forty() {
        let shape = grid_shape(region((-2.0, -2.0), (2.0, 2.0)), 0.1).unwrap();

        assert_eq!(shape, Shape::new(40, 40));
    }

    #[test]
    fn test_rejects_non_positive_pixel_size() {
        let rect = region((-2.0, -2.0), (2.0, 2.0));

        assert_eq!(
            grid_shape(rect, 0.0),
            Err(SampleGridError::InvalidPixelSize { pixel_size: 0.0 })
        );
        assert_eq!(
            grid_shape(rect, -0.5),
            Err(SampleGridError::InvalidPixelSize { pixel_size: -0.5 })
        );
        assert!(grid_shape(rect, f64::NAN).is_err());
        assert!(grid_shape(rect, f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_pixel_larger_than_region() {
        let result = grid_shape(region((0.0, 0.0), (1.0, 4.0)), 2.0);

        assert_eq!(
            result,
            Err(SampleGridError::EmptyGrid {
                width: 1.0,
                height: 4.0,
                pixel_size: 2.0
            })
        );
    }

    #[test]
    fn test_rejects_tiny_pixel_size_without_overflow() {
        let rect = region((-2.0, -2.0), (2.0, 2.0));

        let result = grid_shape(rect, 1e-300);

        assert_eq!(
            result,
            Err(SampleGridError::TooLarge {
                rows: usize::MAX,
                cols: usize::MAX
            })
        );
        assert!(sample_grid(rect, 1e-300).is_err());
    }

    #[test]
    fn test_rejects_grid_beyond_allocation_limit() {
        // 4 / 1e-9 = 4e9 per axis: the product fits in u64 but not in memory
        let result = grid_shape(region((-2.0, -2.0), (2.0, 2.0)), 1e-9);

        assert!(matches!(result, Err(SampleGridError::TooLarge { .. })));
    }

    #[test]
    fn test_sample_grid_layout() {
        let grid = sample_grid(region((-1.0, -2.0), (1.0, 2.0)), 0.5).unwrap();

        assert_eq!(grid.shape(), Shape::new(8, 4));
        assert_eq!(grid.get(0, 0), Some(&Complex::new(-1.0, -2.0)));
        assert_eq!(grid.get(0, 3), Some(&Complex::new(1.0, -2.0)));
        assert_eq!(grid.get(7, 0), Some(&Complex::new(-1.0, 2.0)));
        assert_eq!(grid.get(7, 3), Some(&Complex::new(1.0, 2.0)));
    }

    #[test]
    fn test_rows_share_imaginary_part_and_columns_share_real_part() {
        let grid = sample_grid(region((-2.0, -1.5), (0.5, 1.5)), 0.25).unwrap();

        for row in grid.rows() {
            assert!(row.iter().all(|z| z.imag == row[0].imag));
        }
        for col in 0..grid.shape().cols {
            let real = grid.get(0, col).unwrap().real;
            assert!((0..grid.shape().rows).all(|row| grid.get(row, col).unwrap().real == real));
        }
    }

    #[test]
    fn test_samples_stay_inside_region() {
        let rect = region((-0.8, 0.1), (-0.6, 0.3));
        let grid = sample_grid(rect, 0.01).unwrap();

        assert!(grid.as_slice().iter().all(|&z| rect.contains_point(z)));
    }
}
