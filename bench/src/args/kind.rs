use super::examples::print_examples;
use super::output::BenchmarkOutputCommand;
use super::summary::SummaryArgs;
use super::sweep::SweepArgs;
use clap::Subcommand;
use meowlab_bench_report::tool_kind::ToolKind;

#[derive(Subcommand, Debug)]
pub enum ToolCommand {
    #[command(
        about = "Buffer size sweep",
        long_about = "Drives dd across a range of buffer size multipliers and measures the \
achieved throughput for each, then recommends the smallest buffer that stays within 90% of peak",
        visible_alias = "sw",
        verbatim_doc_comment
    )]
    Sweep(SweepArgs),

    #[command(
        about = "cat implementation performance summary",
        long_about = "Prints the recorded execution times of the mycat implementations next to \
the system cat baseline, with rankings and charts",
        visible_alias = "su",
        verbatim_doc_comment
    )]
    Summary(SummaryArgs),

    #[command(about = "Print examples", visible_alias = "e", verbatim_doc_comment)]
    Examples,
}

impl ToolCommand {
    pub fn as_simple_kind(&self) -> ToolKind {
        match self {
            ToolCommand::Sweep(_) => ToolKind::Sweep,
            ToolCommand::Summary(_) => ToolKind::Summary,
            ToolCommand::Examples => {
                print_examples();
                std::process::exit(0);
            }
        }
    }

    pub fn output_command(&self) -> Option<&BenchmarkOutputCommand> {
        match self {
            ToolCommand::Sweep(args) => args.output.as_ref(),
            ToolCommand::Summary(args) => args.output.as_ref(),
            ToolCommand::Examples => {
                print_examples();
                std::process::exit(0);
            }
        }
    }

    pub fn validate(&self) {
        if let ToolCommand::Sweep(args) = self {
            args.validate()
        }
    }
}
