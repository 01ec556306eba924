use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use painton::error::PaintonError;
use painton::parser;
use painton::render::{self, ppm};

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("painton: fatal error: no input file");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PaintonError::Parse(err)) => {
            eprintln!("{path}:{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("painton: error: {path}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), PaintonError> {
    let source = fs::read_to_string(path)?;

    let start = Instant::now();
    let scene = parser::parse(&source)?;
    println!("Parsed {path} in {:.3} ms", millis(start));

    println!("Number of shapes: {}", scene.shape_count());
    println!("Number of colors: {}", scene.color_count());
    println!("Number of fills: {}", scene.fills().len());

    let start = Instant::now();
    let image = render::render(&scene);
    println!(
        "Rendered {}x{} image in {:.3} ms",
        image.width(),
        image.height(),
        millis(start)
    );

    let output = Path::new(path).with_extension("ppm");
    let start = Instant::now();
    fs::write(&output, ppm::encode(&image))?;
    println!("Wrote {} in {:.3} ms", output.display(), millis(start));

    Ok(())
}

fn millis(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}
