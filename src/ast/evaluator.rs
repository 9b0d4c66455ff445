use crate::ast::{ASTNode, Parser};
use crate::error::{EvalError, SyntaxError};
use crate::functions::register_functions;
use std::collections::HashMap;
use std::sync::Arc;

pub type Function = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Evaluates expressions in the single variable `x`.
///
/// The function registry is filled before the evaluator is shared and is
/// never mutated afterwards, so one evaluator can serve any number of
/// concurrent evaluations through `&self`.
pub struct Evaluator {
    pub(crate) functions: HashMap<String, Function>,
}

impl Evaluator {
    /// Creates an `Evaluator` without any functions.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers a single-argument function under `name`.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Parses an expression and checks every name in it against the registry.
    pub fn parse_expression(&self, expression: &str) -> Result<ASTNode, EvalError> {
        let ast = Parser::parse_expression(expression)?;
        ast.try_walk(&mut |node: &ASTNode| match node {
            ASTNode::Identifier(name) => Err(self.reject_identifier(name)),
            ASTNode::FunctionCall { name, .. } if !self.has_function(name) => {
                Err(EvalError::UnknownFunction(name.clone()))
            }
            _ => Ok(()),
        })?;
        Ok(ast)
    }

    /// Evaluates a given expression string with the variable bound to `x`.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if the evaluation succeeds.
    /// * `Err(EvalError)` if parsing or evaluation fails.
    pub fn evaluate_expression(&self, expression: &str, x: f64) -> Result<f64, EvalError> {
        let ast = self.parse_expression(expression)?;
        self.evaluate(&ast, x)
    }

    /// Evaluates an `ASTNode` with the variable bound to `x`.
    pub fn evaluate(&self, ast: &ASTNode, x: f64) -> Result<f64, EvalError> {
        match ast {
            ASTNode::Number(n) => Ok(*n),
            ASTNode::Variable => Ok(x),
            ASTNode::Identifier(name) => Err(self.reject_identifier(name)),
            ASTNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = self.evaluate(left, x)?;
                let right_value = self.evaluate(right, x)?;
                operator.apply(left_value, right_value)
            }
            ASTNode::Group(inner) => self.evaluate(inner, x),
            ASTNode::FunctionCall { name, argument } => {
                let function = self
                    .functions
                    .get(name)
                    .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
                let argument = self.evaluate(argument, x)?;
                Ok(function(argument))
            }
        }
    }

    fn reject_identifier(&self, name: &str) -> EvalError {
        if self.has_function(name) {
            SyntaxError::MissingArgument(name.to_string()).into()
        } else {
            EvalError::UnknownFunction(name.to_string())
        }
    }
}

impl Default for Evaluator {
    /// An evaluator with the builtin functions registered.
    fn default() -> Self {
        let mut evaluator = Self::new();
        register_functions(&mut evaluator);
        evaluator
    }
}
