use crate::ast::{ASTNode, Operator, VARIABLE};
use crate::error::SyntaxError;
use log::debug;
use pest::error::InputLocation;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

/// Characters the grammar's `WHITESPACE` rule skips between tokens.
const SKIPPED: [char; 4] = [' ', '\t', '\r', '\n'];

#[derive(Parser)]
#[grammar = "./expression.pest"]
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parses `input` into an AST. Function names are not checked here; see
    /// [`crate::ast::Evaluator::parse_expression`].
    pub fn parse_expression(input: &str) -> Result<ASTNode, SyntaxError> {
        debug!("Parsing expression: {}", input);
        let parsed = ExpressionParser::parse(Rule::input, input)
            .map_err(|e| {
                let position = match e.location {
                    InputLocation::Pos(position) => position,
                    InputLocation::Span((start, _)) => start,
                };
                SyntaxError::Parse {
                    position,
                    message: e.variant.message().into_owned(),
                }
            })?
            .next()
            .ok_or_else(|| malformed_tree("input"))?;

        let expression = next_pair(&mut parsed.into_inner(), "expression")?;
        let end = expression.as_span().end();
        let rest = input[end..].trim_start_matches(SKIPPED);
        if !rest.is_empty() {
            return Err(SyntaxError::TrailingCharacters {
                position: input.len() - rest.len(),
                rest: rest.trim_end_matches(SKIPPED).to_string(),
            });
        }

        let ast = Self::build_expression(expression)?;
        debug!("Parse result: {:?}", ast);
        Ok(ast)
    }

    fn build_expression(pair: Pair<Rule>) -> Result<ASTNode, SyntaxError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_term(next_pair(&mut pairs, "term")?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator = match operator_pair.as_rule() {
                Rule::PLUS => Operator::Add,
                Rule::MINUS => Operator::Subtract,
                _ => return Err(unexpected(&operator_pair)),
            };

            let right = Self::build_term(next_pair(&mut pairs, "term")?)?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_term(pair: Pair<Rule>) -> Result<ASTNode, SyntaxError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_power(next_pair(&mut pairs, "power")?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator = match operator_pair.as_rule() {
                Rule::STAR => Operator::Multiply,
                Rule::SLASH => Operator::Divide,
                _ => return Err(unexpected(&operator_pair)),
            };

            let right = Self::build_power(next_pair(&mut pairs, "power")?)?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    /// `a^b^c` folds to `(a^b)^c`.
    fn build_power(pair: Pair<Rule>) -> Result<ASTNode, SyntaxError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_factor(next_pair(&mut pairs, "factor")?)?;

        while let Some(operator_pair) = pairs.next() {
            if operator_pair.as_rule() != Rule::CARET {
                return Err(unexpected(&operator_pair));
            }

            let right = Self::build_factor(next_pair(&mut pairs, "factor")?)?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator: Operator::Power,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_factor(pair: Pair<Rule>) -> Result<ASTNode, SyntaxError> {
        match pair.as_rule() {
            Rule::number => {
                let text = pair.as_str();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| SyntaxError::MalformedNumber(text.to_string()))?;
                // Overflow to infinity and underflow to zero are out of range.
                let underflow = value == 0.0 && text.chars().any(|c| matches!(c, '1'..='9'));
                if !value.is_finite() || underflow {
                    return Err(SyntaxError::MalformedNumber(text.to_string()));
                }
                Ok(ASTNode::Number(value))
            }
            Rule::identifier => match pair.as_str() {
                VARIABLE => Ok(ASTNode::Variable),
                name => Ok(ASTNode::Identifier(name.to_string())),
            },
            Rule::group => {
                let inner = next_pair(&mut pair.into_inner(), "expression")?;
                Ok(ASTNode::Group(Box::new(Self::build_expression(inner)?)))
            }
            Rule::function_call => Self::build_function_call(pair),
            _ => Err(unexpected(&pair)),
        }
    }

    fn build_function_call(pair: Pair<Rule>) -> Result<ASTNode, SyntaxError> {
        let mut inner = pair.into_inner();
        let name = next_pair(&mut inner, "function name")?.as_str().to_string();
        if name == VARIABLE {
            return Err(SyntaxError::NotAFunction(name));
        }
        let argument = Self::build_expression(next_pair(&mut inner, "argument")?)?;
        Ok(ASTNode::FunctionCall {
            name,
            argument: Box::new(argument),
        })
    }
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, what: &str) -> Result<Pair<'i, Rule>, SyntaxError> {
    pairs.next().ok_or_else(|| malformed_tree(what))
}

fn malformed_tree(what: &str) -> SyntaxError {
    SyntaxError::Parse {
        position: 0,
        message: format!("expected {} in parse tree", what),
    }
}

fn unexpected(pair: &Pair<Rule>) -> SyntaxError {
    SyntaxError::Parse {
        position: pair.as_span().start(),
        message: format!("unexpected {:?} '{}'", pair.as_rule(), pair.as_str()),
    }
}
