/// Construction-time invariant violations.
///
/// Any of these aborts the run: the refinement has no partial-success mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldError {
    EmptyGrid {
        width: usize,
        height: usize,
    },
    DimensionMismatch {
        what: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    NegativeMagnitude {
        row: usize,
        col: usize,
        value: f32,
    },
    NonFiniteValue {
        what: &'static str,
        row: usize,
        col: usize,
    },
    InvalidWindow {
        size: usize,
    },
    InvalidParameter {
        name: &'static str,
        value: f32,
    },
    /// The peak bilateral weight is not a positive finite f32.
    DegenerateKernel {
        spatial_sigma: f32,
        color_sigma: f32,
    },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::EmptyGrid { width, height } => {
                write!(f, "empty grid ({width}x{height}), both sides must be positive")
            }
            FieldError::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "{what} is {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            FieldError::NegativeMagnitude { row, col, value } => {
                write!(f, "negative magnitude {value} at row {row}, col {col}")
            }
            FieldError::NonFiniteValue { what, row, col } => {
                write!(f, "non-finite {what} at row {row}, col {col}")
            }
            FieldError::InvalidWindow { size } => {
                write!(f, "window size {size} must be odd and at least 1")
            }
            FieldError::InvalidParameter { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            FieldError::DegenerateKernel {
                spatial_sigma,
                color_sigma,
            } => write!(
                f,
                "bilateral kernel peak is not representable for spatial_sigma {spatial_sigma}, color_sigma {color_sigma}"
            ),
        }
    }
}

impl std::error::Error for FieldError {}
