use super::{Cell, ClusterLabels, FieldError};
use crate::angle::{orientation_from_gradient, wrap_orientation};
use crate::edges::Grad;
use crate::image::{ImageF32, ImageView};
use log::debug;

/// Angle and magnitude planes of one field state.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    pub angle: ImageF32,
    pub magnitude: ImageF32,
}

impl FieldState {
    fn new(width: usize, height: usize) -> Self {
        Self {
            angle: ImageF32::new(width, height),
            magnitude: ImageF32::new(width, height),
        }
    }
}

/// Borrowed construction inputs for [`OrientationField::from_parts`].
#[derive(Clone, Copy, Debug)]
pub struct FieldParts<'a> {
    pub gx: &'a ImageF32,
    pub gy: &'a ImageF32,
    pub magnitude: &'a ImageF32,
    pub angle: &'a ImageF32,
    pub labels: &'a ClusterLabels,
}

#[derive(Clone, Debug)]
pub struct OrientationField {
    width: usize,
    height: usize,
    cluster_count: usize,
    cells: Vec<Cell>,
    front: FieldState,
    back: FieldState,
}

impl OrientationField {
    /// Build a field from image gradients; the initial angle of every cell is
    /// `atan(-dx / dy)` wrapped into `(-π/2, π/2]`.
    pub fn from_grad(grad: &Grad, labels: &ClusterLabels) -> Result<Self, FieldError> {
        let angle = ImageF32::from_vec(
            grad.gx.w,
            grad.gx.h,
            grad.gx
                .data
                .iter()
                .zip(&grad.gy.data)
                .map(|(&dx, &dy)| orientation_from_gradient(dx, dy))
                .collect(),
        )
        .ok_or(FieldError::DimensionMismatch {
            what: "vertical gradient",
            expected: grad.gx.dims(),
            found: grad.gy.dims(),
        })?;
        Self::from_parts(FieldParts {
            gx: &grad.gx,
            gy: &grad.gy,
            magnitude: &grad.mag,
            angle: &angle,
            labels,
        })
    }

    /// Build a field from explicit planes. Angles are wrapped into
    /// `(-π/2, π/2]`; every other value is taken as given.
    pub fn from_parts(parts: FieldParts<'_>) -> Result<Self, FieldError> {
        let width = parts.labels.width();
        let height = parts.labels.height();
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyGrid { width, height });
        }
        let expected = (width, height);
        for (what, plane) in [
            ("horizontal gradient", parts.gx),
            ("vertical gradient", parts.gy),
            ("magnitude", parts.magnitude),
            ("angle", parts.angle),
        ] {
            if plane.dims() != expected || plane.data.len() != width * height {
                return Err(FieldError::DimensionMismatch {
                    what,
                    expected,
                    found: plane.dims(),
                });
            }
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut front = FieldState::new(width, height);
        for row in 0..height {
            for col in 0..width {
                let dx = parts.gx.get(col, row);
                let dy = parts.gy.get(col, row);
                let magnitude = parts.magnitude.get(col, row);
                let angle = parts.angle.get(col, row);
                for (what, value) in [
                    ("horizontal gradient", dx),
                    ("vertical gradient", dy),
                    ("magnitude", magnitude),
                    ("angle", angle),
                ] {
                    if !value.is_finite() {
                        return Err(FieldError::NonFiniteValue { what, row, col });
                    }
                }
                if magnitude < 0.0 {
                    return Err(FieldError::NegativeMagnitude {
                        row,
                        col,
                        value: magnitude,
                    });
                }

                cells.push(Cell {
                    row,
                    col,
                    cluster: parts.labels.get(row, col),
                    dx,
                    dy,
                    initial_magnitude: magnitude,
                });
                front.angle.set(col, row, wrap_orientation(angle));
                front.magnitude.set(col, row, magnitude);
            }
        }

        debug!(
            "OrientationField: {}x{} cells, {} clusters",
            width,
            height,
            parts.labels.count()
        );

        Ok(Self {
            width,
            height,
            cluster_count: parts.labels.count(),
            cells,
            back: front.clone(),
            front,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width × height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.width + col]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn angle(&self, row: usize, col: usize) -> f32 {
        self.front.angle.get(col, row)
    }

    #[inline]
    pub fn magnitude(&self, row: usize, col: usize) -> f32 {
        self.front.magnitude.get(col, row)
    }

    /// Current state.
    pub fn state(&self) -> &FieldState {
        &self.front
    }

    pub fn angles(&self) -> &ImageF32 {
        &self.front.angle
    }

    pub fn magnitudes(&self) -> &ImageF32 {
        &self.front.magnitude
    }

    /// Magnitudes as they were at construction.
    pub fn initial_magnitudes(&self) -> ImageF32 {
        ImageF32::from_fn(self.width, self.height, |col, row| {
            self.cell(row, col).initial_magnitude
        })
    }

    /// Read buffer, write buffer and provenance for one sweep.
    pub(crate) fn sweep_buffers(&mut self) -> (&FieldState, &mut FieldState, &[Cell]) {
        (&self.front, &mut self.back, &self.cells)
    }

    /// Publish the write buffer as the current state.
    pub(crate) fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
