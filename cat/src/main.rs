use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use meowlab_cat::{cat_file, Strategy};

#[derive(Debug, Parser)]
#[command(
    name = "mycat",
    version,
    about = "Prints a file to stdout using a selectable buffering strategy"
)]
struct Args {
    /// File to print
    file: PathBuf,

    /// Buffering strategy to copy with
    #[arg(short, long, value_enum, default_value_t = Strategy::TunedBuffer)]
    strategy: Strategy,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = cat_file(&args.file, &mut out, args.strategy).and_then(|copied| {
        out.flush().map_err(|source| meowlab_cat::CatError::Write { source })?;
        Ok(copied)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("mycat: {error}");
            ExitCode::FAILURE
        }
    }
}
