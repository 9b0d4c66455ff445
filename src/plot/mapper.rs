use crate::error::MapError;
use crate::plot::{Sample, SampleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A point in canvas space: x grows rightwards, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

/// Affine transform from `[left, right) x [-max_abs_y, max_abs_y]` onto a canvas.
///
/// `y = 0` lands on the vertical center, `y = max_abs_y` on the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    left: f64,
    scale_x: f64,
    scale_y: f64,
    center_y: f64,
}

impl CoordinateMapper {
    pub fn new(left: f64, right: f64, max_abs_y: f64, canvas: Canvas) -> Result<Self, MapError> {
        let width = f64::from(canvas.width);
        let center_y = f64::from(canvas.height) / 2.0;

        // Written as a negation so NaN bounds are rejected too.
        if !(right > left) {
            return Err(MapError::DegenerateRange { left, right });
        }
        let span = right - left;
        let scale_x = width / span;
        if !span.is_finite() || !scale_x.is_finite() {
            return Err(MapError::DegenerateRange { left, right });
        }

        if !(max_abs_y > 0.0) || !max_abs_y.is_finite() {
            return Err(MapError::DegenerateAmplitude { max_abs_y });
        }
        let scale_y = center_y / max_abs_y;

        Ok(Self {
            left,
            scale_x,
            scale_y,
            center_y,
        })
    }

    /// Maps one sample; `index` only labels the error.
    pub fn map_sample(&self, index: usize, sample: Sample) -> Result<PixelPoint, MapError> {
        let x = ((sample.x - self.left) * self.scale_x).trunc();
        let y = (self.center_y - sample.y * self.scale_y).trunc();
        if !x.is_finite() || !y.is_finite() {
            return Err(MapError::NonFinitePoint {
                index,
                x: sample.x,
                y: sample.y,
            });
        }
        // `as` saturates for values beyond the i32 range.
        Ok(PixelPoint {
            x: x as i32,
            y: y as i32,
        })
    }

    pub fn map(&self, samples: &[Sample]) -> Result<Vec<PixelPoint>, MapError> {
        samples
            .iter()
            .enumerate()
            .map(|(index, sample)| self.map_sample(index, *sample))
            .collect()
    }
}

/// Maps a whole sample set, using its tracked extremum for the vertical scale.
pub fn map_samples(
    set: &SampleSet,
    left: f64,
    right: f64,
    canvas: Canvas,
) -> Result<Vec<PixelPoint>, MapError> {
    CoordinateMapper::new(left, right, set.max_abs_y, canvas)?.map(&set.samples)
}
