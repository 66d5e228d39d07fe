mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::args::{Cli, Command, ViewArgs};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::render::{
    membership_for, render_julia, render_julia_with, render_mandelbrot, render_mandelbrot_with, RenderController,
    RenderError, RenderRequest, RenderSummary,
};
pub use crate::controllers::render_config::{RenderConfig, DEFAULT_OUTPUT_DIR, DEFAULT_PIXEL_SIZE};
pub use crate::core::actions::rasterize_membership::{rasterize_membership, BlackOnWhite};
pub use crate::core::actions::ports::colour_map::ColourMap;
pub use crate::core::actions::sample_grid::{grid_shape, sample_grid, SampleGridError, MAX_GRID_ELEMENTS};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::{Complex, ParseComplexError};
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::grid::{ComplexGrid, Grid, GridError, MembershipGrid, Shape};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::membership::{
    classify, classify_julia, classify_julia_with, classify_mandelbrot, classify_mandelbrot_with, ClassifyError,
    EscapeCriterion, DEFAULT_MAX_ITERATIONS, ESCAPE_RADIUS,
};
pub use crate::core::fractals::recurrence::{step, Constant, Recurrence, RecurrenceError};
pub use crate::core::util::linspace::linspace;
pub use crate::presenters::file::png::PngFilePresenter;
