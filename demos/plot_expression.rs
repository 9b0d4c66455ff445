//! Command-line stand-in for the input form and the drawing surface:
//!
//! ```text
//! cargo run --example plot_expression -- "sin(x)*x" -10 10
//! ```
use plotfn::plot::{Canvas, PixelPoint, PlotConfig, Plotter, Renderer};
use std::env;
use std::process::ExitCode;

const COLUMNS: usize = 100;
const ROWS: usize = 30;

/// Downscales the canvas onto a grid of characters.
struct TextRenderer {
    grid: Vec<Vec<char>>,
}

impl TextRenderer {
    fn new() -> Self {
        Self {
            grid: vec![vec![' '; COLUMNS]; ROWS],
        }
    }
}

impl Renderer for TextRenderer {
    fn draw_points(&mut self, canvas: Canvas, points: &[PixelPoint]) {
        let to_cell = |value: i32, size: u32, cells: usize| {
            let cell = value.max(0) as usize * cells / (size as usize + 1);
            cell.min(cells - 1)
        };

        for point in points {
            let column = to_cell(point.x, canvas.width, COLUMNS);
            let row = to_cell(point.y, canvas.height, ROWS);
            self.grid[row][column] = '*';
        }
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [expression, left, right] = args.as_slice() else {
        eprintln!("usage: plot_expression <expression> <left bound> <right bound>");
        return ExitCode::FAILURE;
    };

    let config = PlotConfig::builder()
        .parallel(true)
        .build()
        .expect("default canvas is valid");
    let plotter = Plotter::new(config);

    match plotter.plot_text(expression, left, right) {
        Ok(plot) => {
            let mut renderer = TextRenderer::new();
            plot.render(&mut renderer);
            for row in renderer.grid {
                println!("{}", row.into_iter().collect::<String>());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
