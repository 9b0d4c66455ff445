pub mod trigonometry;

use crate::ast::Evaluator;

pub fn register_functions(evaluator: &mut Evaluator) {
    trigonometry::register(evaluator);
}
