use std::path::{Path, PathBuf};

use crate::core::fractals::membership::EscapeCriterion;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_PIXEL_SIZE: f64 = 5e-4;

/// Settings shared by every render, whichever set is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    pub criterion: EscapeCriterion,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            criterion: EscapeCriterion::default(),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn with_criterion(mut self, criterion: EscapeCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    #[must_use]
    pub fn output_path(&self, output_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(output_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();

        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.criterion, EscapeCriterion::Snapshot);
    }

    #[test]
    fn test_output_path_joins_directory_and_name() {
        let config = RenderConfig::default().with_output_dir("images");

        assert_eq!(config.output_path("julia.png"), PathBuf::from("images").join("julia.png"));
    }

    #[test]
    fn test_with_criterion() {
        let config = RenderConfig::default().with_criterion(EscapeCriterion::Cumulative);

        assert_eq!(config.criterion, EscapeCriterion::Cumulative);
    }
}
