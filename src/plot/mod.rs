mod config;
mod mapper;
mod sampler;

pub use config::*;
pub use mapper::{map_samples, Canvas, CoordinateMapper, PixelPoint};
pub use sampler::{Sample, SampleSet, Sampler};

use crate::ast::Evaluator;
use crate::error::PlotError;
use log::{debug, error};

/// Receives finished pixel points. Drawing is entirely up to the implementor.
pub trait Renderer {
    fn draw_points(&mut self, canvas: Canvas, points: &[PixelPoint]);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub canvas: Canvas,
    pub points: Vec<PixelPoint>,
}

impl Plot {
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_points(self.canvas, &self.points);
    }
}

/// Parses a bound typed by the user, rejecting anything beyond `limit`.
pub fn parse_bound(text: &str, limit: Option<f64>) -> Result<f64, PlotError> {
    let value = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PlotError::InvalidBound {
            text: text.to_string(),
        })?;

    match limit {
        Some(limit) if value.abs() > limit => Err(PlotError::BoundOutOfRange { value, limit }),
        _ => Ok(value),
    }
}

/// Samples an expression and maps it onto the configured canvas.
pub struct Plotter {
    evaluator: Evaluator,
    config: PlotConfig,
}

impl Plotter {
    /// A plotter with the builtin functions.
    pub fn new(config: PlotConfig) -> Self {
        Self::with_evaluator(Evaluator::default(), config)
    }

    pub fn with_evaluator(evaluator: Evaluator, config: PlotConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn plot(&self, expression: &str, left: f64, right: f64) -> Result<Plot, PlotError> {
        self.try_plot(expression, left, right).map_err(|e| {
            error!("Error: {}", e);
            e
        })
    }

    /// Same as [`Plotter::plot`] with both bounds given as text.
    pub fn plot_text(
        &self,
        expression: &str,
        left_text: &str,
        right_text: &str,
    ) -> Result<Plot, PlotError> {
        let left = parse_bound(left_text, self.config.bound_limit)?;
        let right = parse_bound(right_text, self.config.bound_limit)?;
        self.plot(expression, left, right)
    }

    fn try_plot(&self, expression: &str, left: f64, right: f64) -> Result<Plot, PlotError> {
        let set = Sampler::new(&self.evaluator)
            .parallel(self.config.parallel)
            .sample(expression, left, right, self.config.sample_count)?;
        let points = map_samples(&set, left, right, self.config.canvas)?;
        debug!("Plotted '{}' as {} points", expression, points.len());

        Ok(Plot {
            canvas: self.config.canvas,
            points,
        })
    }
}

impl Default for Plotter {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, MapError, SampleError};

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(Canvas, Vec<PixelPoint>)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_points(&mut self, canvas: Canvas, points: &[PixelPoint]) {
            self.calls.push((canvas, points.to_vec()));
        }
    }

    fn small_plotter() -> Plotter {
        let config = PlotConfig::builder()
            .sample_count(4)
            .canvas(8, 4)
            .build()
            .unwrap();
        Plotter::new(config)
    }

    #[test]
    fn test_plot_identity() {
        let plot = small_plotter().plot("x", -1.0, 1.0).unwrap();
        // xs -1, -0.5, 0, 0.5 with scale_x 4; ys with scale_y 2 around center 2.
        assert_eq!(
            plot.points,
            [
                PixelPoint { x: 0, y: 4 },
                PixelPoint { x: 2, y: 3 },
                PixelPoint { x: 4, y: 2 },
                PixelPoint { x: 6, y: 1 },
            ]
        );
        assert_eq!(plot.canvas, Canvas::new(8, 4));
    }

    #[test]
    fn test_plot_renders_once() {
        let plot = small_plotter().plot("x*x", -1.0, 1.0).unwrap();
        let mut renderer = RecordingRenderer::default();
        plot.render(&mut renderer);

        assert_eq!(renderer.calls.len(), 1);
        assert_eq!(renderer.calls[0].0, Canvas::new(8, 4));
        assert_eq!(renderer.calls[0].1, plot.points);
    }

    #[test]
    fn test_plot_default_config() {
        let plot = Plotter::default().plot("sin(x)", -10.0, 10.0).unwrap();
        assert_eq!(plot.points.len(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(plot.canvas, Canvas::new(1200, 600));
        assert!(plot.points.iter().all(|p| (0..=600).contains(&p.y)));
    }

    #[test]
    fn test_plot_errors() {
        let plotter = small_plotter();

        assert!(matches!(
            plotter.plot("1/x", -1.0, 1.0),
            Err(PlotError::Sample(SampleError::Evaluation {
                source: EvalError::DivisionByZero,
                ..
            }))
        ));
        assert!(matches!(
            plotter.plot("x-x", -1.0, 1.0),
            Err(PlotError::Map(MapError::DegenerateAmplitude { .. }))
        ));
        assert!(matches!(
            plotter.plot("x", 1.0, 1.0),
            Err(PlotError::Map(MapError::DegenerateRange { .. }))
        ));
    }

    #[test]
    fn test_plot_text() {
        let plotter = small_plotter();
        let plot = plotter.plot_text("x", " -1 ", "1.0").unwrap();
        assert_eq!(plot, plotter.plot("x", -1.0, 1.0).unwrap());

        assert_eq!(
            plotter.plot_text("x", "abc", "1"),
            Err(PlotError::InvalidBound {
                text: "abc".to_string()
            })
        );
        assert_eq!(
            plotter.plot_text("x", "-1", "1000.5"),
            Err(PlotError::BoundOutOfRange {
                value: 1000.5,
                limit: 1000.0
            })
        );
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("2.5", None), Ok(2.5));
        assert_eq!(parse_bound("-1000", Some(1000.0)), Ok(-1000.0));
        assert_eq!(parse_bound("1e6", None), Ok(1e6));
        assert!(parse_bound("", None).is_err());
        assert!(parse_bound("inf", None).is_err());
        assert!(parse_bound("NaN", None).is_err());
    }
}
