pub mod ast;
pub mod error;
pub mod functions;
pub mod plot;

use ast::Evaluator;
use error::{EvalError, PlotError};
use plot::{Plot, Plotter};

/// Evaluates `expression` once with the variable bound to `x`, using the builtin functions.
pub fn evaluate_expression(expression: &str, x: f64) -> Result<f64, EvalError> {
    Evaluator::default().evaluate_expression(expression, x)
}

/// Plots `expression` over `[left, right)` with the default configuration.
pub fn plot_expression(expression: &str, left: f64, right: f64) -> Result<Plot, PlotError> {
    Plotter::default().plot(expression, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxError;

    #[test]
    fn test_evaluate_expression() {
        assert_eq!(evaluate_expression("2+3*4", 0.0), Ok(14.0));
        assert_eq!(evaluate_expression("2^3^2", 0.0), Ok(64.0));
        assert_eq!(evaluate_expression("x", 5.0), Ok(5.0));
        assert!(evaluate_expression("sin(x)", 0.0).unwrap().abs() < 1e-12);
        assert_eq!(evaluate_expression("1/0", 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(
            evaluate_expression("foo(x)", 0.0),
            Err(EvalError::UnknownFunction("foo".to_string()))
        );
        assert!(matches!(
            evaluate_expression("(1+2", 0.0),
            Err(EvalError::Syntax(_))
        ));
    }

    #[test]
    fn test_out_of_range_literal_is_an_error() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(
            evaluate_expression(&huge, 0.0),
            Err(EvalError::Syntax(SyntaxError::MalformedNumber(huge.clone())))
        );
        assert!(matches!(
            evaluate_expression(&format!("x/{}", huge), 1.0),
            Err(EvalError::Syntax(SyntaxError::MalformedNumber(_)))
        ));
    }

    #[test]
    fn test_plot_expression() {
        let plot = plot_expression("tg(x)", -1.0, 1.0).unwrap();
        assert_eq!(plot.points.len(), plot::DEFAULT_SAMPLE_COUNT);
        assert_eq!(plot.points.first().map(|p| p.x), Some(0));
        assert!(plot.points.windows(2).all(|w| w[0].x <= w[1].x));
    }
}
