mod dd;
mod parser;

use crate::args::sweep::SweepArgs;
use human_repr::HumanCount;
use meowlab_bench_report::measurement::{SweepFailure, SweepMeasurement, ThroughputSource};
use tracing::{info, warn};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub struct SweepOutcome {
    pub measurements: Vec<SweepMeasurement>,
    pub failures: Vec<SweepFailure>,
}

/// Drives dd once per configured multiplier and prints a progress row as each
/// run completes. Failed runs become `Failed` rows and are kept out of the
/// measurement list; they never abort the sweep.
pub fn run_sweep(args: &SweepArgs) -> SweepOutcome {
    let mut measurements = Vec::new();
    let mut failures = Vec::new();

    info!(
        "Sweeping {} buffer size multipliers, {} {} -> {} per run",
        args.multipliers.len(),
        args.volume.as_u64().human_count_bytes(),
        args.source,
        args.sink
    );

    println!("Testing different buffer sizes performance...");
    println!("Multiplier\tBuffer Size\tTime(s)\tSpeed(MB/s)");
    println!("{}", "-".repeat(55));

    for &multiplier in &args.multipliers {
        let buffer_size = args.base_block_size * u64::from(multiplier);
        let count = args.volume.as_u64() / buffer_size;

        if count == 0 {
            warn!(
                "Skipping multiplier {multiplier}: buffer size {buffer_size} exceeds the {} byte volume",
                args.volume.as_u64()
            );
            println!("{multiplier}\t\t{buffer_size}\t\tFailed\tFailed");
            failures.push(SweepFailure::new(
                multiplier,
                buffer_size,
                format!(
                    "Buffer size {buffer_size} exceeds the total volume of {} bytes",
                    args.volume.as_u64()
                ),
            ));
            continue;
        }

        match dd::run_dd(&args.dd_path, &args.source, &args.sink, buffer_size, count) {
            Ok(invocation) => {
                let (throughput_mb_s, source) = resolve_throughput(
                    &invocation.diagnostics,
                    count * buffer_size,
                    invocation.duration_secs,
                );

                println!(
                    "{multiplier}\t\t{buffer_size}\t\t{:.3}\t{:.1}",
                    invocation.duration_secs, throughput_mb_s
                );
                measurements.push(SweepMeasurement::new(
                    multiplier,
                    buffer_size,
                    invocation.duration_secs,
                    throughput_mb_s,
                    source,
                ));
            }
            Err(reason) => {
                warn!("Multiplier {multiplier} failed: {reason}");
                println!("{multiplier}\t\t{buffer_size}\t\tFailed\tFailed");
                failures.push(SweepFailure::new(multiplier, buffer_size, reason));
            }
        }
    }

    SweepOutcome {
        measurements,
        failures,
    }
}

/// Rate reported by dd when it printed one, otherwise the wall-clock
/// estimate over the bytes actually requested.
fn resolve_throughput(
    diagnostics: &str,
    transferred_bytes: u64,
    duration_secs: f64,
) -> (f64, ThroughputSource) {
    match parser::parse_throughput_mb_s(diagnostics) {
        Some(rate) => (rate, ThroughputSource::Reported),
        None => {
            let transferred_mb = transferred_bytes as f64 / BYTES_PER_MB;
            (transferred_mb / duration_secs, ThroughputSource::Estimated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byte_unit::Byte;

    fn sweep_args(multipliers: Vec<u32>, volume: u64, dd_path: &str) -> SweepArgs {
        SweepArgs {
            output: None,
            base_block_size: 4096,
            multipliers,
            volume: Byte::from_u64(volume),
            source: "/dev/zero".to_string(),
            sink: "/dev/null".to_string(),
            dd_path: dd_path.to_string(),
        }
    }

    #[test]
    fn reported_rate_wins_over_the_estimate() {
        let (rate, source) = resolve_throughput("copied, 0.5 s, 100 MB/s", 512 * 1024 * 1024, 5.0);
        assert_eq!(rate, 100.0);
        assert_eq!(source, ThroughputSource::Reported);
    }

    #[test]
    fn estimate_is_transferred_megabytes_over_duration() {
        let (rate, source) = resolve_throughput("131072+0 records out", 512 * 1024 * 1024, 4.0);
        assert_eq!(rate, 128.0);
        assert_eq!(source, ThroughputSource::Estimated);
    }

    #[test]
    fn unresolvable_dd_turns_every_run_into_a_failure() {
        let args = sweep_args(vec![1, 2, 4], 4 * 1024 * 1024, "/nonexistent/dd");
        let outcome = run_sweep(&args);

        assert!(outcome.measurements.is_empty());
        assert_eq!(outcome.failures.len(), 3);
        assert!(outcome.failures[0].reason.contains("Failed to run"));
    }

    #[test]
    fn oversized_buffer_is_recorded_as_failure() {
        // 4096 * 2 exceeds the 4 KiB volume, so the run never starts
        let args = sweep_args(vec![2], 4096, "/nonexistent/dd");
        let outcome = run_sweep(&args);

        assert!(outcome.measurements.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].multiplier, 2);
        assert!(outcome.failures[0].reason.contains("exceeds the total volume"));
    }
}
