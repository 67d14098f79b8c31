use clap::{Parser, Subcommand};

#[derive(Subcommand, Debug, Clone)]
pub enum BenchmarkOutputCommand {
    /// Store report.json and rendered charts in a directory
    Output(BenchmarkOutputArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct BenchmarkOutputArgs {
    /// Directory the per-run output directory is created under
    #[arg(long, short = 'o')]
    pub output_dir: Option<String>,

    /// Identifier of the machine the run happened on (defaults to hostname)
    #[arg(long, default_value_t = hostname::get().unwrap().to_string_lossy().to_string())]
    pub identifier: String,

    /// Free-form remark appended to directory names and chart titles (e.g. no-cache)
    #[arg(long)]
    pub remark: Option<String>,

    /// Extra information stored in report.json
    #[arg(long)]
    pub extra_info: Option<String>,

    /// Git reference (commit hash, branch or tag) stored in report.json
    #[arg(long)]
    pub gitref: Option<String>,

    /// Date of the git reference, preferably the merge date of the commit
    #[arg(long)]
    pub gitref_date: Option<String>,

    /// Open the rendered charts in the browser once the run finishes
    #[arg(long, default_value_t = false)]
    pub open_charts: bool,
}
