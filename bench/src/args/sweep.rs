use super::defaults::*;
use super::output::BenchmarkOutputCommand;
use crate::args::common::MeowlabBenchArgs;
use byte_unit::Byte;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug, Clone)]
pub struct SweepArgs {
    #[command(subcommand)]
    pub output: Option<BenchmarkOutputCommand>,

    /// Base block size in bytes, must be a power of two
    #[arg(long, short = 'b', default_value_t = DEFAULT_BASE_BLOCK_SIZE, value_parser = validate_base_block_size)]
    pub base_block_size: u64,

    /// Comma-separated list of buffer size multipliers to test
    #[arg(long, short = 'm', value_delimiter = ',', default_value = DEFAULT_MULTIPLIERS)]
    pub multipliers: Vec<u32>,

    /// Total volume to transfer per run in human readable format, e.g. "512 MiB", "1GiB"
    #[arg(long, short = 'v', default_value = DEFAULT_TOTAL_VOLUME, value_parser = parse_volume)]
    pub volume: Byte,

    /// Source path to read from
    #[arg(long, default_value_t = DEFAULT_SOURCE.to_owned())]
    pub source: String,

    /// Sink path to write to
    #[arg(long, default_value_t = DEFAULT_SINK.to_owned())]
    pub sink: String,

    /// Path to the dd executable
    #[arg(long, default_value_t = DEFAULT_DD_PATH.to_owned())]
    pub dd_path: String,
}

fn validate_base_block_size(v: &str) -> Result<u64, String> {
    let size = v
        .parse::<u64>()
        .map_err(|e| format!("Invalid base block size '{v}': {e}"))?;
    if !size.is_power_of_two() {
        return Err(format!(
            "Base block size must be a power of two, got {size}"
        ));
    }
    Ok(size)
}

fn parse_volume(v: &str) -> Result<Byte, String> {
    Byte::parse_str(v, true).map_err(|e| e.to_string())
}

impl SweepArgs {
    pub fn validate(&self) {
        let mut cmd = MeowlabBenchArgs::command();
        if self.multipliers.is_empty() {
            cmd.error(
                ErrorKind::InvalidValue,
                "At least one buffer size multiplier must be provided.",
            )
            .exit();
        }

        if self.multipliers.contains(&0) {
            cmd.error(
                ErrorKind::InvalidValue,
                "Buffer size multipliers must be greater than zero.",
            )
            .exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_block_size_accepts_powers_of_two() {
        assert_eq!(validate_base_block_size("4096"), Ok(4096));
        assert_eq!(validate_base_block_size("512"), Ok(512));
        assert_eq!(validate_base_block_size("1"), Ok(1));
    }

    #[test]
    fn base_block_size_rejects_other_values() {
        assert!(validate_base_block_size("0").is_err());
        assert!(validate_base_block_size("1000").is_err());
        assert!(validate_base_block_size("4095").is_err());
        assert!(validate_base_block_size("abc").is_err());
    }

    #[test]
    fn volume_accepts_human_readable_sizes() {
        assert_eq!(parse_volume("512 MiB").unwrap().as_u64(), 512 * 1024 * 1024);
        assert_eq!(parse_volume("4096").unwrap().as_u64(), 4096);
        assert_eq!(parse_volume("1GiB").unwrap().as_u64(), 1024 * 1024 * 1024);
        assert!(parse_volume("lots").is_err());
    }
}
