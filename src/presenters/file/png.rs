use std::path::Path;

use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::{ImageFormat, RgbImage};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

fn dimension_mismatch() -> ImageError {
    ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::DimensionMismatch))
}

/// Writes the canvas as an 8-bit RGB PNG, one image pixel per buffer pixel.
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    type Failure = ImageError;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ImageError> {
        let shape = buffer.shape();
        let width = u32::try_from(shape.cols).map_err(|_| dimension_mismatch())?;
        let height = u32::try_from(shape.rows).map_err(|_| dimension_mismatch())?;

        let image = RgbImage::from_raw(width, height, buffer.buffer().clone())
            .ok_or_else(dimension_mismatch)?;

        image.save_with_format(filepath, ImageFormat::Png)
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
