use rayon::prelude::*;
use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::grid::{ComplexGrid, Grid, MembershipGrid};
use crate::core::fractals::recurrence::Recurrence;

/// Bound on `|z|` for `z² + c`: once an orbit leaves this disk it diverges.
pub const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// How the per-step `|z| < 2` tests are combined into the final grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EscapeCriterion {
    /// Each step overwrites the previous result; only the last examined
    /// step (iterate `max_iter - 2`) decides membership.
    #[default]
    Snapshot,
    /// A point is a member only if it stayed inside the disk at every
    /// examined step.
    Cumulative,
}

impl EscapeCriterion {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::Cumulative => "cumulative",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    ZeroMaxIterations,
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "Maximum iterations must be greater than zero"),
        }
    }
}

impl Error for ClassifyError {}

fn write_bounded(result: &mut MembershipGrid, iterate: &ComplexGrid, criterion: EscapeCriterion, first: bool) {
    let cells = result.as_mut_slice().par_iter_mut().zip(iterate.as_slice().par_iter());

    match criterion {
        EscapeCriterion::Cumulative if !first => cells.for_each(|(member, z)| {
            *member = *member && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED;
        }),
        _ => cells.for_each(|(member, z)| {
            *member = z.magnitude_squared() < ESCAPE_RADIUS_SQUARED;
        }),
    }
}

/// Drives `recurrence` for `max_iter` pulls and reduces the orbits to a
/// membership grid.
///
/// The pull counter reaches 1 on the initial value. While it is below
/// `max_iter` the current iterate is tested against the escape radius; when
/// it reaches `max_iter` the last result is returned. With `max_iter == 1`
/// no iterate is ever tested and every element is `false`.
pub fn classify(
    mut recurrence: Recurrence,
    max_iter: u32,
    criterion: EscapeCriterion,
) -> Result<MembershipGrid, ClassifyError> {
    if max_iter == 0 {
        return Err(ClassifyError::ZeroMaxIterations);
    }

    let mut result = Grid::filled(recurrence.shape(), false);
    let mut pulls: u32 = 0;

    loop {
        let iterate = recurrence.next_iterate();
        pulls += 1;

        if pulls >= max_iter {
            return Ok(result);
        }

        write_bounded(&mut result, iterate, criterion, pulls == 1);
    }
}

pub fn classify_mandelbrot(grid: &ComplexGrid, max_iter: u32) -> Result<MembershipGrid, ClassifyError> {
    classify_mandelbrot_with(grid, max_iter, EscapeCriterion::default())
}

pub fn classify_mandelbrot_with(
    grid: &ComplexGrid,
    max_iter: u32,
    criterion: EscapeCriterion,
) -> Result<MembershipGrid, ClassifyError> {
    classify(Recurrence::mandelbrot(grid.clone()), max_iter, criterion)
}

pub fn classify_julia(
    grid: &ComplexGrid,
    c: Complex,
    max_iter: u32,
) -> Result<MembershipGrid, ClassifyError> {
    classify_julia_with(grid, c, max_iter, EscapeCriterion::default())
}

pub fn classify_julia_with(
    grid: &ComplexGrid,
    c: Complex,
    max_iter: u32,
    criterion: EscapeCriterion,
) -> Result<MembershipGrid, ClassifyError> {
    classify(Recurrence::julia(grid.clone(), c), max_iter, criterion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid::Shape;
    use crate::core::fractals::recurrence::Constant;

    fn single(c: Complex) -> ComplexGrid {
        Grid::filled(Shape::new(1, 1), c)
    }

    fn is_member(grid: &MembershipGrid) -> bool {
        grid.as_slice()[0]
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let result = classify_mandelbrot(&single(Complex::ZERO), 0);

        assert_eq!(result, Err(ClassifyError::ZeroMaxIterations));
    }

    #[test]
    fn test_single_iteration_is_all_false() {
        let grid = Grid::filled(Shape::new(3, 4), Complex::ZERO);

        for criterion in [EscapeCriterion::Snapshot, EscapeCriterion::Cumulative] {
            let result = classify_mandelbrot_with(&grid, 1, criterion).unwrap();

            assert_eq!(result, Grid::filled(Shape::new(3, 4), false));
        }
    }

    #[test]
    fn test_origin_is_member() {
        for max_iter in 2..20 {
            assert!(is_member(&classify_mandelbrot(&single(Complex::ZERO), max_iter).unwrap()));
        }
    }

    #[test]
    fn test_minus_one_is_member() {
        for max_iter in 2..50 {
            assert!(is_member(&classify_mandelbrot(&single(Complex::new(-1.0, 0.0)), max_iter).unwrap()));
        }
    }

    #[test]
    fn test_one_escapes_from_four_iterations() {
        let c = single(Complex::new(1.0, 0.0));

        // orbit 0, 1, 2, ...: the third pull sees |2| which is not < 2
        assert!(is_member(&classify_mandelbrot(&c, 3).unwrap()));
        for max_iter in 4..30 {
            assert!(!is_member(&classify_mandelbrot(&c, max_iter).unwrap()));
        }
    }

    #[test]
    fn test_outside_radius_escapes_after_first_step() {
        let c = single(Complex::new(2.0, 1.0));

        // with two pulls only z0 = 0 has been tested
        assert!(is_member(&classify_mandelbrot(&c, 2).unwrap()));
        for max_iter in 3..30 {
            assert!(!is_member(&classify_mandelbrot(&c, max_iter).unwrap()));
        }
    }

    #[test]
    fn test_shape_is_preserved() {
        let grid = Grid::filled(Shape::new(7, 3), Complex::new(0.1, -0.4));

        let mandelbrot = classify_mandelbrot(&grid, 10).unwrap();
        let julia = classify_julia(&grid, Complex::new(-0.7, 0.27), 10).unwrap();

        assert_eq!(mandelbrot.shape(), Shape::new(7, 3));
        assert_eq!(julia.shape(), Shape::new(7, 3));
    }

    #[test]
    fn test_julia_reference_points() {
        let c = Complex::new(0.25, 0.0);

        assert!(is_member(&classify_julia(&single(Complex::new(0.25, 0.25)), c, 100).unwrap()));
        assert!(!is_member(
            &classify_julia(&single(Complex::new(1.0, 1.0)), Complex::new(1.0, 0.0), 100).unwrap()
        ));
    }

    #[test]
    fn test_julia_tests_starting_point_first() {
        let start = single(Complex::new(3.0, 0.0));

        // the starting point is the first tested iterate
        assert!(!is_member(&classify_julia(&start, Complex::ZERO, 2).unwrap()));
    }

    #[test]
    fn test_snapshot_ignores_earlier_escape() {
        // z0 = 2.5 starts outside the disk, z1 = 2.5² - 6.25 = 0 is back inside
        let initial = single(Complex::new(2.5, 0.0));
        let recurrence = Recurrence::new(initial, Constant::Scalar(Complex::new(-6.25, 0.0))).unwrap();

        let snapshot = classify(recurrence.clone(), 3, EscapeCriterion::Snapshot).unwrap();
        let cumulative = classify(recurrence, 3, EscapeCriterion::Cumulative).unwrap();

        assert!(is_member(&snapshot));
        assert!(!is_member(&cumulative));
    }

    #[test]
    fn test_criteria_agree_on_reference_points() {
        let data = vec![
            Complex::ZERO,
            Complex::new(-1.0, 0.0),
            Complex::new(1.0, 0.0),
            Complex::new(-2.0, 2.0),
            Complex::new(0.25, 0.5),
        ];
        let grid = Grid::from_data(Shape::new(1, 5), data).unwrap();

        let snapshot = classify_mandelbrot_with(&grid, 50, EscapeCriterion::Snapshot).unwrap();
        let cumulative = classify_mandelbrot_with(&grid, 50, EscapeCriterion::Cumulative).unwrap();

        assert_eq!(snapshot, cumulative);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let grid = Grid::from_data(
            Shape::new(2, 2),
            vec![
                Complex::new(-0.75, 0.1),
                Complex::new(0.3, 0.5),
                Complex::new(-1.2, 0.0),
                Complex::new(0.26, 0.0),
            ],
        )
        .unwrap();

        assert_eq!(classify_mandelbrot(&grid, 200), classify_mandelbrot(&grid, 200));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(EscapeCriterion::Snapshot.display_name(), "snapshot");
        assert_eq!(EscapeCriterion::Cumulative.display_name(), "cumulative");
    }
}
