mod analytics;
mod args;
mod error;
mod logging;
mod plot;
mod runner;
mod summary;
mod sweep;
mod utils;

use crate::args::common::MeowlabBenchArgs;
use crate::error::BenchError;
use crate::logging::Logging;
use crate::runner::BenchmarkRunner;
use clap::Parser;
use figlet_rs::FIGfont;

fn main() -> Result<(), BenchError> {
    let args = MeowlabBenchArgs::parse();

    let mut logging = Logging::new();
    logging.init(&args.debug);

    let standard_font = FIGfont::standard().unwrap();
    let figure = standard_font.convert("Meowlab Bench");
    println!("{}", figure.unwrap());

    let mut runner = BenchmarkRunner::new(args);
    runner.run()
}
