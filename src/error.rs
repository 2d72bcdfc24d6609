use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gridmask operations
#[derive(Error, Diagnostic, Debug)]
pub enum GridMaskError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gridmask::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to load {path}: {message}")]
    #[diagnostic(
        code(gridmask::load),
        help("Input must be a readable raster image (PGM, PNG, BMP, TIFF)")
    )]
    Load {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image has no pixels ({width}x{height})")]
    #[diagnostic(
        code(gridmask::empty),
        help("Ranges can only be derived from an image with at least one pixel")
    )]
    EmptyImage { width: u32, height: u32 },

    #[error("Dimension mismatch for {what}: expected {expected:?}, got {actual:?}")]
    #[diagnostic(code(gridmask::dimensions))]
    DimensionMismatch {
        what: &'static str,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Invalid intensity values: {message}")]
    #[diagnostic(code(gridmask::values))]
    InvalidValues { message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(gridmask::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(gridmask::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl GridMaskError {
    /// Check two images share dimensions, naming the offending input on failure.
    pub(crate) fn check_dimensions(
        what: &'static str,
        expected: (u32, u32),
        actual: (u32, u32),
    ) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(GridMaskError::DimensionMismatch {
                what,
                expected,
                actual,
            })
        }
    }
}

pub type Result<T> = std::result::Result<T, GridMaskError>;
