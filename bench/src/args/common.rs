use super::defaults::*;
use super::kind::ToolCommand;
use super::output::{BenchmarkOutputArgs, BenchmarkOutputCommand};
use super::sweep::SweepArgs;
use crate::utils::cpu_name::append_cpu_name_lowercase;
use clap::Parser;
use meowlab_bench_report::params::BenchmarkParams;
use meowlab_bench_report::tool_kind::ToolKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct MeowlabBenchArgs {
    /// Analysis tool
    #[command(subcommand)]
    pub tool: ToolCommand,

    /// Write a TRACE level log of this run to the given file
    #[arg(long, short = 'd')]
    pub debug: Option<PathBuf>,
}

impl MeowlabBenchArgs {
    pub fn validate(&self) {
        self.tool.validate()
    }

    pub fn sweep_args(&self) -> Option<&SweepArgs> {
        match &self.tool {
            ToolCommand::Sweep(args) => Some(args),
            _ => None,
        }
    }

    pub fn output_args(&self) -> Option<&BenchmarkOutputArgs> {
        self.tool
            .output_command()
            .map(|BenchmarkOutputCommand::Output(args)| args)
    }

    pub fn output_dir(&self) -> Option<String> {
        self.output_args().and_then(|args| args.output_dir.clone())
    }

    pub fn identifier(&self) -> Option<String> {
        self.output_args().map(|args| args.identifier.clone())
    }

    pub fn remark(&self) -> Option<String> {
        self.output_args().and_then(|args| args.remark.clone())
    }

    pub fn extra_info(&self) -> Option<String> {
        self.output_args().and_then(|args| args.extra_info.clone())
    }

    pub fn gitref(&self) -> Option<String> {
        self.output_args().and_then(|args| args.gitref.clone())
    }

    pub fn gitref_date(&self) -> Option<String> {
        self.output_args().and_then(|args| args.gitref_date.clone())
    }

    pub fn open_charts(&self) -> bool {
        self.output_args()
            .map(|args| args.open_charts)
            .unwrap_or(false)
    }

    /// Generates the output directory name based on tool parameters.
    pub fn generate_dir_name(&self) -> String {
        let mut parts = match &self.tool {
            ToolCommand::Sweep(args) => vec![
                "sweep".to_string(),
                args.base_block_size.to_string(),
                args.multipliers.len().to_string(),
                args.volume.as_u64().to_string(),
            ],
            ToolCommand::Summary(_) => vec!["summary".to_string()],
            ToolCommand::Examples => unreachable!(),
        };

        if let Some(remark) = self.remark() {
            parts.push(remark);
        }

        if let Some(gitref) = self.gitref() {
            parts.push(gitref);
        }

        if let Some(identifier) = self.identifier() {
            parts.push(identifier);
        }

        let mut dir_name = parts.join("_");
        append_cpu_name_lowercase(&mut dir_name);
        dir_name
    }

    /// Generates a human-readable pretty name for the run
    pub fn generate_pretty_name(&self) -> String {
        let mut name = match &self.tool {
            ToolCommand::Sweep(args) => format!(
                "{} multipliers, {} B base block, {} per run",
                args.multipliers.len(),
                args.base_block_size,
                args.volume,
            ),
            ToolCommand::Summary(_) => "cat implementations vs system cat".to_string(),
            ToolCommand::Examples => unreachable!(),
        };

        if let Some(remark) = self.remark() {
            name.push_str(&format!(" ({})", remark));
        }

        name
    }
}

fn recreate_bench_command(args: &MeowlabBenchArgs) -> String {
    let mut parts = vec!["meowlab-bench".to_string()];

    let kind_str = match args.tool.as_simple_kind() {
        ToolKind::Sweep => "sweep",
        ToolKind::Summary => "summary",
    };
    parts.push(kind_str.to_string());

    // Tool params, skipping defaults
    if let Some(sweep) = args.sweep_args() {
        if sweep.base_block_size != DEFAULT_BASE_BLOCK_SIZE {
            parts.push(format!("--base-block-size {}", sweep.base_block_size));
        }

        let multipliers = sweep
            .multipliers
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(",");
        if multipliers != DEFAULT_MULTIPLIERS {
            parts.push(format!("--multipliers {}", multipliers));
        }

        if sweep.volume != byte_unit::Byte::parse_str(DEFAULT_TOTAL_VOLUME, true).unwrap() {
            parts.push(format!("--volume '{}'", sweep.volume));
        }

        if sweep.source != DEFAULT_SOURCE {
            parts.push(format!("--source '{}'", sweep.source));
        }

        if sweep.sink != DEFAULT_SINK {
            parts.push(format!("--sink '{}'", sweep.sink));
        }

        if sweep.dd_path != DEFAULT_DD_PATH {
            parts.push(format!("--dd-path '{}'", sweep.dd_path));
        }
    }

    if let Some(output_dir) = args.output_dir() {
        parts.push("output".to_string());
        parts.push(format!("--output-dir '{}'", output_dir));

        if let Some(remark) = args.remark() {
            parts.push(format!("--remark '{}'", remark));
        }

        if let Some(gitref) = args.gitref() {
            parts.push(format!("--gitref {}", gitref));
        }
    }

    parts.join(" ")
}

impl From<&MeowlabBenchArgs> for BenchmarkParams {
    fn from(args: &MeowlabBenchArgs) -> Self {
        let tool_kind = args.tool.as_simple_kind();

        let (base_block_size, multipliers, total_volume_bytes, source, sink, dd_path) =
            match args.sweep_args() {
                Some(sweep) => (
                    sweep.base_block_size,
                    sweep.multipliers.clone(),
                    sweep.volume.as_u64(),
                    sweep.source.clone(),
                    sweep.sink.clone(),
                    sweep.dd_path.clone(),
                ),
                None => (0, Vec::new(), 0, String::new(), String::new(), String::new()),
            };

        let remark = args.remark();
        let extra_info = args.extra_info();
        let gitref = args.gitref();
        let gitref_date = args.gitref_date();
        let pretty_name = args.generate_pretty_name();
        let bench_command = recreate_bench_command(args);

        let remark_for_identifier = remark
            .clone()
            .unwrap_or("no_remark".to_string())
            .replace(' ', "_");

        let params_identifier = vec![
            tool_kind.to_string().to_lowercase().replace(' ', "_"),
            remark_for_identifier,
            base_block_size.to_string(),
            multipliers.len().to_string(),
            total_volume_bytes.to_string(),
        ];

        let params_identifier = params_identifier.join("_");

        BenchmarkParams {
            tool_kind,
            base_block_size,
            multipliers,
            total_volume_bytes,
            source,
            sink,
            dd_path,
            remark,
            extra_info,
            gitref,
            gitref_date,
            pretty_name,
            bench_command,
            params_identifier,
        }
    }
}
