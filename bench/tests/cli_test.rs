use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn bench_command() -> Command {
    Command::cargo_bin("meowlab-bench").unwrap()
}

/// Output directories get a generated name (params plus CPU suffix), so the
/// tests locate the single run directory instead of predicting it.
fn only_run_directory(output_dir: &Path) -> PathBuf {
    let mut directories: Vec<PathBuf> = fs::read_dir(output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_dir())
        .collect();
    assert_eq!(directories.len(), 1, "expected exactly one run directory");
    directories.pop().unwrap()
}

#[test]
fn help_lists_both_tools() {
    bench_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sweep"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("examples"));
}

#[test]
fn examples_subcommand_prints_usage() {
    bench_command()
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buffer size sweep with defaults"))
        .stdout(predicate::str::contains("--output-dir performance_results"));
}

#[test]
fn summary_prints_ranking_table() {
    bench_command()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "*** MEOWLAB PERFORMANCE ANALYSIS SUMMARY ***",
        ))
        .stdout(predicate::str::contains(
            "Program        Exec Time      vs System cat  Performance",
        ))
        .stdout(predicate::str::contains(
            "System cat     252.7ms        1.00           xBaseline",
        ))
        .stdout(predicate::str::contains(
            "mycat1         870.5s         3444.87        x344386.7% slower",
        ))
        .stdout(predicate::str::contains(
            "mycat5         265.1ms        1.05           x4.9% slower",
        ));
}

#[test]
fn summary_prints_findings_and_journey() {
    bench_command()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. mycat1 (byte-by-byte): Catastrophically slow - 3445x slower than system cat",
        ))
        .stdout(predicate::str::contains(
            "2. mycat2 (add buffer): Massive improvement - 100.0% faster than mycat1",
        ))
        .stdout(predicate::str::contains(
            "5. mycat5 (optimized buffer): Very close performance, 4.9% slower than system cat",
        ))
        .stdout(predicate::str::contains("Best Implementation: System cat"))
        .stdout(predicate::str::contains(
            "Performance: 0.0% slower than system cat (very close!)",
        ))
        .stdout(predicate::str::contains(
            "Step 1 (Add buffer): 99.96% improvement over naive version",
        ))
        .stdout(predicate::str::contains(
            "Step 2 (Optimize buffer size): 30.3% improvement over basic buffer",
        ))
        .stdout(predicate::str::contains(
            "Total improvement: 99.970% faster than naive implementation",
        ))
        .stdout(predicate::str::contains(
            "Final achievement: Came very close to system cat performance (4.9% difference)!",
        ))
        .stdout(predicate::str::contains(
            "• Simple solutions often outperform complex ones",
        ));
}

#[test]
fn summary_output_writes_report_and_charts() {
    let output_dir = tempfile::tempdir().unwrap();

    bench_command()
        .args(["summary", "output", "--output-dir"])
        .arg(output_dir.path())
        .assert()
        .success();

    let run_dir = only_run_directory(output_dir.path());
    let report = fs::read_to_string(run_dir.join("report.json")).unwrap();
    assert!(report.contains("performance_summary"));
    assert!(report.contains("System cat"));
    assert!(run_dir.join("comparison_full.html").exists());
    assert!(run_dir.join("comparison_filtered.html").exists());
}

#[test]
fn sweep_prints_progress_table_and_analysis() {
    bench_command()
        .args(["sweep", "--volume", "4 MiB", "--multipliers", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Testing different buffer sizes performance...",
        ))
        .stdout(predicate::str::contains(
            "Multiplier\tBuffer Size\tTime(s)\tSpeed(MB/s)",
        ))
        .stdout(predicate::str::contains("BUFFER SIZE OPTIMIZATION ANALYSIS"))
        .stdout(predicate::str::contains("Max Speed Achieved:"))
        .stdout(predicate::str::contains("(90% performance threshold)"))
        .stdout(predicate::str::contains("% over 1x buffer"));
}

#[test]
fn sweep_output_writes_report_and_charts() {
    let output_dir = tempfile::tempdir().unwrap();

    bench_command()
        .args(["sweep", "--volume", "4 MiB", "--multipliers", "1,2", "output", "--output-dir"])
        .arg(output_dir.path())
        .assert()
        .success();

    let run_dir = only_run_directory(output_dir.path());
    let report = fs::read_to_string(run_dir.join("report.json")).unwrap();
    assert!(report.contains("buffer_sweep"));
    assert!(report.contains("\"multiplier\":1"));
    assert!(run_dir.join("throughput_line.html").exists());
    assert!(run_dir.join("throughput_bars.html").exists());
}

#[test]
fn sweep_rejects_non_power_of_two_base_block_size() {
    bench_command()
        .args(["sweep", "--base-block-size", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("power of two"));
}

#[test]
fn sweep_with_oversized_multiplier_degrades_to_failed_row() {
    // 2x of the 4096 B base block exceeds the 4 KiB volume; the 1x run still
    // happens and the 2x row comes out as Failed instead of a usage error
    bench_command()
        .args(["sweep", "--volume", "4 KiB", "--multipliers", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed\tFailed"))
        .stdout(predicate::str::contains("BUFFER SIZE OPTIMIZATION ANALYSIS"));
}

#[test]
fn sweep_with_unresolvable_dd_still_finishes() {
    bench_command()
        .args([
            "sweep",
            "--volume",
            "4 MiB",
            "--multipliers",
            "1,2",
            "--dd-path",
            "/nonexistent/dd",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed\tFailed"))
        .stdout(predicate::str::contains("BUFFER SIZE OPTIMIZATION ANALYSIS").not());
}
