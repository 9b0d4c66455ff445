use plotfn::ast::Evaluator;

fn main() {
    pretty_env_logger::init();

    let evaluator = Evaluator::default();

    let expression = "sin(x)^2+ctg(x)/2";
    let ast = evaluator
        .parse_expression(expression)
        .expect("Failed to parse");

    for x in [0.5, 1.0, 0.0] {
        match evaluator.evaluate(&ast, x) {
            Ok(result) => println!("{} at x = {}: {}", expression, x, result),
            Err(err) => println!("Error: {}", err),
        }
    }

    // Errors are typed; this one names the offending identifier.
    if let Err(err) = evaluator.evaluate_expression("sqrt(x)", 4.0) {
        println!("Error: {}", err);
    }
}
