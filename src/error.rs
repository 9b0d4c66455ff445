use thiserror::Error;

/// Grammar-level failures. Never depends on the function registry except
/// for [`SyntaxError::MissingArgument`], which is raised once the name is
/// known to be a function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },
    #[error("Malformed number '{0}'")]
    MalformedNumber(String),
    #[error("Unexpected trailing characters at position {position}: '{rest}'")]
    TrailingCharacters { position: usize, rest: String },
    #[error("Expected '(' after function name '{0}'")]
    MissingArgument(String),
    #[error("'{0}' is the variable and cannot be called")]
    NotAFunction(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
    #[error("Division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// The expression was rejected before any sample was taken.
    #[error(transparent)]
    Expression(#[from] EvalError),
    #[error("Evaluation failed at sample {index} (x = {x}): {source}")]
    Evaluation {
        index: usize,
        x: f64,
        #[source]
        source: EvalError,
    },
}

impl SampleError {
    /// The evaluation error behind this failure, wherever it happened.
    pub fn cause(&self) -> &EvalError {
        match self {
            SampleError::Expression(error) => error,
            SampleError::Evaluation { source, .. } => source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("Non-positive interval width: [{left}, {right}]")]
    DegenerateRange { left: f64, right: f64 },
    #[error("Degenerate amplitude: max |y| is {max_abs_y}")]
    DegenerateAmplitude { max_abs_y: f64 },
    #[error("Sample {index} (x = {x}, y = {y}) does not map to a finite pixel")]
    NonFinitePoint { index: usize, x: f64, y: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Canvas must not be empty, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("Bound limit must be positive and finite, got {0}")]
    InvalidBoundLimit(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("Invalid bound '{text}'")]
    InvalidBound { text: String },
    #[error("Bound {value} is outside [-{limit}, {limit}]")]
    BoundOutOfRange { value: f64, limit: f64 },
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Map(#[from] MapError),
}
