use crate::error::ConfigError;
use crate::plot::Canvas;

pub const DEFAULT_SAMPLE_COUNT: usize = 100_000;
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;
pub const DEFAULT_BOUND_LIMIT: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Number of samples taken over `[left, right)`.
    pub sample_count: usize,
    pub canvas: Canvas,
    /// Evaluate samples on the rayon thread pool.
    pub parallel: bool,
    /// Largest accepted |bound| when bounds come in as text. `None` disables the check.
    pub bound_limit: Option<f64>,
}

impl PlotConfig {
    pub fn builder() -> PlotConfigBuilder {
        PlotConfigBuilder::new()
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            canvas: Canvas::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            parallel: false,
            bound_limit: Some(DEFAULT_BOUND_LIMIT),
        }
    }
}

pub struct PlotConfigBuilder {
    config: PlotConfig,
}

impl PlotConfigBuilder {
    pub fn new() -> Self {
        PlotConfigBuilder {
            config: PlotConfig::default(),
        }
    }

    pub fn sample_count(mut self, sample_count: usize) -> Self {
        self.config.sample_count = sample_count;
        self
    }

    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.config.canvas = Canvas::new(width, height);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn bound_limit(mut self, bound_limit: Option<f64>) -> Self {
        self.config.bound_limit = bound_limit;
        self
    }

    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        let Canvas { width, height } = self.config.canvas;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyCanvas { width, height });
        }
        if let Some(limit) = self.config.bound_limit {
            if !(limit > 0.0 && limit.is_finite()) {
                return Err(ConfigError::InvalidBoundLimit(limit));
            }
        }
        Ok(self.config)
    }
}

impl Default for PlotConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
