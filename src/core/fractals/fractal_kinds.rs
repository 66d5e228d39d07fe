use crate::core::data::complex::Complex;
use crate::core::data::grid::{ComplexGrid, MembershipGrid};
use crate::core::fractals::membership::{classify, ClassifyError, EscapeCriterion};
use crate::core::fractals::recurrence::Recurrence;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia {
        c: Complex,
    },
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    #[must_use]
    pub const fn default_output_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot.png",
            Self::Julia { .. } => "julia.png",
        }
    }

    /// Orbits for this set over `grid`: the grid is `c` for Mandelbrot and
    /// the starting points for Julia.
    #[must_use]
    pub fn recurrence(self, grid: ComplexGrid) -> Recurrence {
        match self {
            Self::Mandelbrot => Recurrence::mandelbrot(grid),
            Self::Julia { c } => Recurrence::julia(grid, c),
        }
    }

    pub fn classify(
        self,
        grid: ComplexGrid,
        max_iter: u32,
        criterion: EscapeCriterion,
    ) -> Result<MembershipGrid, ClassifyError> {
        classify(self.recurrence(grid), max_iter, criterion)
    }
}
