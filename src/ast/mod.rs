mod evaluator;
mod parser;

pub use evaluator::{Evaluator, Function};
pub use parser::ExpressionParser as Parser;

use crate::error::EvalError;

/// Name of the single free variable.
pub const VARIABLE: &str = "x";

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    Variable,
    /// A bare name other than the variable. The evaluator always rejects it,
    /// as a function missing its argument or as an unknown name.
    Identifier(String),
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    Group(Box<ASTNode>),
    FunctionCall {
        name: String,
        argument: Box<ASTNode>,
    },
}

impl ASTNode {
    /// Visits every node depth-first, left to right, stopping at the first error.
    pub fn try_walk<E>(&self, visit: &mut impl FnMut(&ASTNode) -> Result<(), E>) -> Result<(), E> {
        visit(self)?;
        match self {
            ASTNode::BinaryOperation { left, right, .. } => {
                left.try_walk(visit)?;
                right.try_walk(visit)
            }
            ASTNode::Group(inner) => inner.try_walk(visit),
            ASTNode::FunctionCall { argument, .. } => argument.try_walk(visit),
            ASTNode::Number(_) | ASTNode::Variable | ASTNode::Identifier(_) => Ok(()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Power => Ok(left.powf(right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(1.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(1.0, -0.0),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(Operator::Divide.apply(1.0, 4.0), Ok(0.25));
    }

    #[test]
    fn test_power_is_powf() {
        assert_eq!(Operator::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(Operator::Power.apply(4.0, 0.5), Ok(2.0));
        assert!(Operator::Power.apply(-1.0, 0.5).unwrap().is_nan());
    }

    #[test]
    fn test_walk_order() {
        let ast = ASTNode::BinaryOperation {
            left: Box::new(ASTNode::Number(1.0)),
            operator: Operator::Add,
            right: Box::new(ASTNode::FunctionCall {
                name: "sin".to_string(),
                argument: Box::new(ASTNode::Variable),
            }),
        };
        let mut seen = Vec::new();
        ast.try_walk(&mut |node: &ASTNode| -> Result<(), ()> {
            seen.push(match node {
                ASTNode::Number(_) => "number",
                ASTNode::Variable => "variable",
                ASTNode::FunctionCall { .. } => "call",
                ASTNode::BinaryOperation { .. } => "binary",
                _ => "other",
            });
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, ["binary", "number", "call", "variable"]);
    }
}
