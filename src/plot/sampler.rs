use crate::ast::{ASTNode, Evaluator};
use crate::error::SampleError;
use log::debug;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// All samples of one run plus the largest |y| seen while taking them.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub samples: Vec<Sample>,
    pub max_abs_y: f64,
}

impl SampleSet {
    fn empty() -> Self {
        Self {
            samples: Vec::new(),
            max_abs_y: 0.0,
        }
    }

    fn push(&mut self, sample: Sample) {
        // NaN never wins the comparison, so it never becomes the extremum.
        if sample.y.abs() > self.max_abs_y {
            self.max_abs_y = sample.y.abs();
        }
        self.samples.push(sample);
    }

    fn append(mut self, other: SampleSet) -> Self {
        self.samples.extend(other.samples);
        self.max_abs_y = self.max_abs_y.max(other.max_abs_y);
        self
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Evaluates one expression at evenly spaced points of `[left, right)`.
pub struct Sampler<'a> {
    evaluator: &'a Evaluator,
    parallel: bool,
}

impl<'a> Sampler<'a> {
    pub fn new(evaluator: &'a Evaluator) -> Self {
        Self {
            evaluator,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parses `expression` once, then samples it `count` times.
    pub fn sample(
        &self,
        expression: &str,
        left: f64,
        right: f64,
        count: usize,
    ) -> Result<SampleSet, SampleError> {
        let ast = self.evaluator.parse_expression(expression)?;
        self.sample_ast(&ast, left, right, count)
    }

    /// Samples at `left + step * i` for `i` in `0..count`, where
    /// `step = (right - left) / count`. `right` itself is never sampled.
    ///
    /// The first failing evaluation aborts the whole run.
    pub fn sample_ast(
        &self,
        ast: &ASTNode,
        left: f64,
        right: f64,
        count: usize,
    ) -> Result<SampleSet, SampleError> {
        if count == 0 {
            return Ok(SampleSet::empty());
        }

        let step = (right - left) / count as f64;
        debug!(
            "Sampling {} points over [{}, {}) with step {} ({})",
            count,
            left,
            right,
            step,
            if self.parallel { "parallel" } else { "sequential" }
        );

        let set = if self.parallel {
            self.sample_parallel(ast, left, step, count)?
        } else {
            self.sample_sequential(ast, left, step, count)?
        };

        debug!("Sampled {} points, max |y| = {}", set.len(), set.max_abs_y);
        Ok(set)
    }

    fn sample_at(
        &self,
        ast: &ASTNode,
        index: usize,
        left: f64,
        step: f64,
    ) -> Result<Sample, SampleError> {
        let x = left + step * index as f64;
        self.evaluator
            .evaluate(ast, x)
            .map(|y| Sample { x, y })
            .map_err(|source| SampleError::Evaluation { index, x, source })
    }

    fn sample_sequential(
        &self,
        ast: &ASTNode,
        left: f64,
        step: f64,
        count: usize,
    ) -> Result<SampleSet, SampleError> {
        let mut set = SampleSet {
            samples: Vec::with_capacity(count),
            max_abs_y: 0.0,
        };
        for index in 0..count {
            set.push(self.sample_at(ast, index, left, step)?);
        }
        Ok(set)
    }

    /// Each worker folds its chunk into a partial set; partial sets are
    /// concatenated in index order.
    fn sample_parallel(
        &self,
        ast: &ASTNode,
        left: f64,
        step: f64,
        count: usize,
    ) -> Result<SampleSet, SampleError> {
        (0..count)
            .into_par_iter()
            .map(|index| self.sample_at(ast, index, left, step))
            .try_fold(SampleSet::empty, |mut set, sample| {
                set.push(sample?);
                Ok::<_, SampleError>(set)
            })
            .try_reduce(SampleSet::empty, |head, tail| Ok(head.append(tail)))
    }
}
