use std::process::Command;
use std::time::Instant;
use tracing::debug;

pub struct DdInvocation {
    pub duration_secs: f64,
    pub diagnostics: String,
}

/// Runs a single dd transfer and captures its wall-clock duration together
/// with the combined stdout/stderr diagnostic text (dd reports progress and
/// the final rate on stderr).
pub fn run_dd(
    dd_path: &str,
    source: &str,
    sink: &str,
    buffer_size: u64,
    count: u64,
) -> Result<DdInvocation, String> {
    let mut command = Command::new(dd_path);
    command
        .arg(format!("if={source}"))
        .arg(format!("of={sink}"))
        .arg(format!("bs={buffer_size}"))
        .arg(format!("count={count}"))
        .arg("status=progress");

    debug!("Running {command:?}");

    let start = Instant::now();
    let output = command
        .output()
        .map_err(|e| format!("Failed to run '{dd_path}': {e}"))?;
    let duration_secs = start.elapsed().as_secs_f64();

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "dd exited with {}: {}",
            output.status,
            stderr.trim()
        ));
    }

    let mut diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();
    diagnostics.push('\n');
    diagnostics.push_str(&String::from_utf8_lossy(&output.stdout));

    Ok(DdInvocation {
        duration_secs,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_reports_spawn_failure() {
        let result = run_dd("/nonexistent/dd", "/dev/zero", "/dev/null", 4096, 1);
        let reason = result.err().expect("spawn should fail");
        assert!(reason.contains("Failed to run"));
        assert!(reason.contains("/nonexistent/dd"));
    }
}
