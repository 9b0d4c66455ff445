use crate::ast::Evaluator;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sin", f64::sin);
    evaluator.register_function("cos", f64::cos);
    evaluator.register_function("tg", f64::tan);
    evaluator.register_function("ctg", ctg);
}

/// Cotangent. Not guarded: `ctg(0)` is infinite.
pub fn ctg(value: f64) -> f64 {
    1.0 / value.tan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_registers_all_builtins() {
        let mut evaluator = Evaluator::new();
        register(&mut evaluator);
        for name in ["sin", "cos", "tg", "ctg"] {
            assert!(evaluator.has_function(name), "{name} is missing");
        }
        assert!(!evaluator.has_function("tan"));
        assert!(!evaluator.has_function("cot"));
    }

    #[test]
    fn test_ctg() {
        assert!((ctg(PI / 4.0) - 1.0).abs() < 1e-12);
        assert!(ctg(PI / 2.0).abs() < 1e-12);
        assert_eq!(ctg(0.0), f64::INFINITY);
        assert_eq!(ctg(-0.0), f64::NEG_INFINITY);
    }
}
