use crate::{
    report::SummaryReport, report::SweepReport, summary::format_time_ms, utils,
};
use human_repr::HumanCount;

impl SweepReport {
    pub fn subtext(&self) -> String {
        let params_text = self.format_params();
        let mut stats = Vec::new();

        let throughput_stats = self.format_throughput_stats();
        if !throughput_stats.is_empty() {
            stats.push(throughput_stats);
        }

        if let Some(analysis) = &self.analysis {
            stats.push(format!(
                "Optimal: {}x ({:.1} MB/s)  •  Recommended: {}x  •  {:.1}% over 1x Buffer",
                analysis.optimal_multiplier,
                analysis.max_throughput_mb_s,
                analysis.recommended_multiplier,
                analysis.baseline_improvement_percent,
            ));
        }

        let stats_text = stats.join("\n");

        format!("{params_text}\n{stats_text}")
    }

    fn format_throughput_stats(&self) -> String {
        let throughputs = self.throughputs();
        if throughputs.is_empty() {
            return String::new();
        }

        let max = utils::max(&throughputs).unwrap_or_default();
        let min = utils::min(&throughputs).unwrap_or_default();
        let avg = utils::avg(&throughputs).unwrap_or_default();
        let std_dev = utils::std_dev(&throughputs).unwrap_or_default();

        format!(
            "Throughput  •  Max: {max:.1} MB/s  •  Min: {min:.1} MB/s  •  Avg: {avg:.1} MB/s  •  Std Dev: {std_dev:.1} MB/s",
        )
    }

    pub fn format_params(&self) -> String {
        let sweep_info = self.params.format_sweep_info();
        let runs = self.measurements.len() + self.failures.len();
        let total_transferred = self.total_bytes_transferred();

        format!(
            "{}  •  {} Runs  •  {} Transferred in Total  •  {}",
            sweep_info,
            runs,
            total_transferred.human_count_bytes(),
            self.hardware.format_info(),
        )
    }
}

impl SummaryReport {
    pub fn subtext(&self) -> String {
        let params_text = self.format_params();
        let mut stats = Vec::new();

        if let Some(winner) = self.winner() {
            stats.push(format!(
                "Winner: {} ({})",
                winner.label,
                winner.formatted_time()
            ));
        }
        if let Some(slowest) = self.slowest() {
            stats.push(format!(
                "Slowest: {} ({})",
                slowest.label,
                slowest.formatted_time()
            ));
        }

        let stats_text = stats.join("  •  ");

        format!("{params_text}\n{stats_text}")
    }

    pub fn format_params(&self) -> String {
        format!(
            "{} Implementations  •  Baseline: {} ({})  •  {}",
            self.entries.len(),
            self.baseline_label,
            self.baseline()
                .map(|b| format_time_ms(b.time_ms))
                .unwrap_or_else(|| "unknown".to_owned()),
            self.hardware.format_info(),
        )
    }

    fn slowest(&self) -> Option<&crate::summary::SummaryEntry> {
        self.entries.iter().reduce(|worst, candidate| {
            if candidate.time_ms > worst.time_ms {
                candidate
            } else {
                worst
            }
        })
    }
}
