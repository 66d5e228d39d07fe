use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::controllers::render::RenderRequest;
use crate::controllers::render_config::{RenderConfig, DEFAULT_OUTPUT_DIR, DEFAULT_PIXEL_SIZE};
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::membership::{EscapeCriterion, DEFAULT_MAX_ITERATIONS};

#[derive(Debug, Parser)]
#[command(name = "escape_fractals", version, about = "Render Mandelbrot and Julia sets as black and white PNG images")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory the image is written into, created if missing
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Require orbits to stay bounded at every step instead of only the last one
    #[arg(long, global = true)]
    pub cumulative: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Points c whose orbit of z -> z^2 + c starting at 0 stays bounded
    Mandelbrot(ViewArgs),
    /// Points z whose orbit of z -> z^2 + c stays bounded for a fixed c
    Julia {
        /// The fixed parameter, as "real,imag"
        #[arg(long, allow_hyphen_values = true)]
        c: Complex,

        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Lower-left corner of the plane, as "real,imag"
    #[arg(long, allow_hyphen_values = true, default_value = "-2,-2")]
    pub min: Complex,

    /// Upper-right corner of the plane, as "real,imag"
    #[arg(long, allow_hyphen_values = true, default_value = "2,2")]
    pub max: Complex,

    /// Plane units per pixel
    #[arg(long, default_value_t = DEFAULT_PIXEL_SIZE)]
    pub pixel_size: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_iter: u32,

    /// File name inside the output directory, defaults to <set>.png
    #[arg(long)]
    pub output: Option<String>,
}

impl Cli {
    pub fn into_render(self) -> Result<(RenderRequest, RenderConfig), ComplexRectError> {
        let criterion = if self.cumulative {
            EscapeCriterion::Cumulative
        } else {
            EscapeCriterion::Snapshot
        };
        let config = RenderConfig::default()
            .with_output_dir(self.output_dir)
            .with_criterion(criterion);

        let (kind, view) = match self.command {
            Command::Mandelbrot(view) => (FractalKinds::Mandelbrot, view),
            Command::Julia { c, view } => (FractalKinds::Julia { c }, view),
        };
        let output_name = view
            .output
            .unwrap_or_else(|| kind.default_output_name().to_string());

        let request = RenderRequest::new(
            kind,
            view.min,
            view.max,
            view.pixel_size,
            view.max_iter,
            output_name,
        )?;

        Ok((request, config))
    }
}
