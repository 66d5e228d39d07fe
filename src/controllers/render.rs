use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render_config::RenderConfig;
use crate::core::actions::rasterize_membership::{rasterize_membership, BlackOnWhite};
use crate::core::actions::sample_grid::{sample_grid, SampleGridError};
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::grid::{MembershipGrid, Shape};
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::membership::{ClassifyError, EscapeCriterion};
use crate::presenters::file::png::PngFilePresenter;

#[derive(Debug)]
pub enum RenderError {
    Region(ComplexRectError),
    SampleGrid(SampleGridError),
    Classify(ClassifyError),
    PixelBuffer(PixelBufferError),
    OutputDir { path: PathBuf, source: std::io::Error },
    Present(Box<dyn Error>),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "invalid region: {}", err),
            Self::SampleGrid(err) => write!(f, "sample grid error: {}", err),
            Self::Classify(err) => write!(f, "classification error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::OutputDir { path, source } => {
                write!(f, "cannot create output directory {}: {}", path.display(), source)
            }
            Self::Present(err) => write!(f, "could not write image: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::SampleGrid(err) => Some(err),
            Self::Classify(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::OutputDir { source, .. } => Some(source),
            Self::Present(err) => Some(err.as_ref()),
        }
    }
}

impl From<ComplexRectError> for RenderError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

impl From<SampleGridError> for RenderError {
    fn from(err: SampleGridError) -> Self {
        Self::SampleGrid(err)
    }
}

impl From<ClassifyError> for RenderError {
    fn from(err: ClassifyError) -> Self {
        Self::Classify(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// One image to draw: which set, over which part of the plane, and where to
/// save it inside the configured output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub kind: FractalKinds,
    pub region: ComplexRect,
    pub pixel_size: f64,
    pub max_iter: u32,
    pub output_name: String,
}

impl RenderRequest {
    pub fn new(
        kind: FractalKinds,
        corner_min: Complex,
        corner_max: Complex,
        pixel_size: f64,
        max_iter: u32,
        output_name: impl Into<String>,
    ) -> Result<Self, ComplexRectError> {
        Ok(Self {
            kind,
            region: ComplexRect::new(corner_min, corner_max)?,
            pixel_size,
            max_iter,
            output_name: output_name.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub path: PathBuf,
    pub shape: Shape,
    pub members: usize,
}

pub fn membership_for(request: &RenderRequest, criterion: EscapeCriterion) -> Result<MembershipGrid, RenderError> {
    let grid = sample_grid(request.region, request.pixel_size)?;

    debug!(
        fractal = request.kind.display_name(),
        shape = %grid.shape(),
        max_iter = request.max_iter,
        criterion = criterion.display_name(),
        "classifying sample grid"
    );

    let start = Instant::now();
    let membership = request.kind.classify(grid, request.max_iter, criterion)?;

    debug!(elapsed = ?start.elapsed(), "classification finished");

    Ok(membership)
}

pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    config: RenderConfig,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P, config: RenderConfig) -> Self {
        Self { presenter, config }
    }

    pub fn render(&self, request: &RenderRequest) -> Result<RenderSummary, RenderError> {
        info!(
            fractal = request.kind.display_name(),
            min = %request.region.min(),
            max = %request.region.max(),
            pixel_size = request.pixel_size,
            "rendering"
        );

        let membership = membership_for(request, self.config.criterion)?;
        let pixels = rasterize_membership(&membership, &BlackOnWhite)?;

        std::fs::create_dir_all(&self.config.output_dir).map_err(|source| RenderError::OutputDir {
            path: self.config.output_dir.clone(),
            source,
        })?;

        let path = self.config.output_path(&request.output_name);
        self.presenter
            .present(&pixels, &path)
            .map_err(|err| RenderError::Present(Box::new(err)))?;

        let summary = RenderSummary {
            path,
            shape: membership.shape(),
            members: membership.count_members(),
        };

        info!(path = %summary.path.display(), members = summary.members, "saved");

        Ok(summary)
    }
}

pub fn render_mandelbrot(
    corner_min: Complex,
    corner_max: Complex,
    pixel_size: f64,
    max_iter: u32,
    output_name: &str,
) -> Result<RenderSummary, RenderError> {
    render_mandelbrot_with(
        corner_min,
        corner_max,
        pixel_size,
        max_iter,
        output_name,
        RenderConfig::default(),
    )
}

pub fn render_mandelbrot_with(
    corner_min: Complex,
    corner_max: Complex,
    pixel_size: f64,
    max_iter: u32,
    output_name: &str,
    config: RenderConfig,
) -> Result<RenderSummary, RenderError> {
    let request = RenderRequest::new(
        FractalKinds::Mandelbrot,
        corner_min,
        corner_max,
        pixel_size,
        max_iter,
        output_name,
    )?;

    RenderController::new(PngFilePresenter::new(), config).render(&request)
}

pub fn render_julia(
    c: Complex,
    corner_min: Complex,
    corner_max: Complex,
    pixel_size: f64,
    max_iter: u32,
    output_name: &str,
) -> Result<RenderSummary, RenderError> {
    render_julia_with(
        c,
        corner_min,
        corner_max,
        pixel_size,
        max_iter,
        output_name,
        RenderConfig::default(),
    )
}

pub fn render_julia_with(
    c: Complex,
    corner_min: Complex,
    corner_max: Complex,
    pixel_size: f64,
    max_iter: u32,
    output_name: &str,
    config: RenderConfig,
) -> Result<RenderSummary, RenderError> {
    let request = RenderRequest::new(
        FractalKinds::Julia { c },
        corner_min,
        corner_max,
        pixel_size,
        max_iter,
        output_name,
    )?;

    RenderController::new(PngFilePresenter::new(), config).render(&request)
}
