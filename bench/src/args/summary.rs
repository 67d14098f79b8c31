use super::output::BenchmarkOutputCommand;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct SummaryArgs {
    #[command(subcommand)]
    pub output: Option<BenchmarkOutputCommand>,
}
