use colored::Colorize;

use crate::{
    report::{SummaryReport, SweepReport},
    summary::SummaryEntry,
    utils::group_thousands,
};

impl SweepReport {
    /// Prints the analysis block that closes a sweep run. Nothing is printed
    /// when every invocation failed.
    pub fn print_analysis(&self) {
        let Some(analysis) = &self.analysis else {
            return;
        };

        println!();
        println!("{}", "=".repeat(60));
        println!("{}", "BUFFER SIZE OPTIMIZATION ANALYSIS".bold());
        println!("{}", "=".repeat(60));
        println!(
            "Max Speed Achieved: {:.1} MB/s",
            analysis.max_throughput_mb_s
        );
        println!("Optimal Multiplier: {}x", analysis.optimal_multiplier);
        println!(
            "Optimal Buffer Size: {} bytes ({} KB)",
            group_thousands(analysis.optimal_buffer_size_bytes),
            analysis.optimal_buffer_size_bytes / 1024
        );
        println!(
            "Recommended Multiplier: {}x (90% performance threshold)",
            analysis.recommended_multiplier
        );
        println!("Threshold Speed: {:.1} MB/s", analysis.threshold_mb_s);
        println!(
            "Performance Improvement: {:.1}% over 1x buffer",
            analysis.baseline_improvement_percent
        );
    }
}

impl SummaryReport {
    /// Prints the full comparison report: ranking table, key findings,
    /// champion details, optimization journey and insights.
    pub fn print_summary(&self) {
        let Some(baseline) = self.baseline() else {
            return;
        };
        let base_time = baseline.time_ms;

        println!();
        println!("{}", "=".repeat(80));
        println!("{}", "*** MEOWLAB PERFORMANCE ANALYSIS SUMMARY ***".bold());
        println!("{}", "=".repeat(80));

        self.print_table(base_time);
        self.print_key_findings(base_time);
        self.print_champion_details(base_time);
        self.print_journey(base_time);
        self.print_insights();
    }

    fn print_table(&self, base_time: f64) {
        println!(
            "{:<15}{:<15}{:<15}{}",
            "Program",
            "Exec Time",
            format!("vs {}", self.baseline_label),
            "Performance"
        );
        println!("{}", "-".repeat(80));

        let winner_label = self.winner().map(|w| w.label.clone()).unwrap_or_default();
        for entry in &self.entries {
            let improvement = if entry.label == self.baseline_label {
                "Baseline".to_owned()
            } else {
                entry.performance_vs(base_time)
            };
            let row = format!(
                "{:<15}{:<15}{:<15.2}x{}",
                entry.label,
                entry.formatted_time(),
                entry.ratio_to(base_time),
                improvement
            );
            if entry.label == winner_label {
                println!("{}", row.green());
            } else if entry.label == self.outlier_label {
                println!("{}", row.red());
            } else {
                println!("{row}");
            }
        }
    }

    fn print_key_findings(&self, base_time: f64) {
        let Some((mycat1, mycat2, mycat5)) = self.narrative_entries() else {
            return;
        };

        println!();
        println!("{}", "*** KEY FINDINGS:".bold());
        println!("{}", "-".repeat(40));
        println!(
            "1. {} ({}): Catastrophically slow - {:.0}x slower than system cat",
            mycat1.label,
            mycat1.description,
            mycat1.time_ms / base_time
        );
        println!(
            "2. {} ({}): Massive improvement - {:.1}% faster than {}",
            mycat2.label,
            mycat2.description,
            (mycat1.time_ms - mycat2.time_ms) / mycat1.time_ms * 100.0,
            mycat1.label
        );
        if let Some(mycat3) = self.entry("mycat3") {
            println!(
                "3. {} ({}): Performance decreased - theory vs practice gap",
                mycat3.label, mycat3.description
            );
        }
        if let Some(mycat4) = self.entry("mycat4") {
            println!(
                "4. {} ({}): Continued degradation in test environment",
                mycat4.label, mycat4.description
            );
        }
        let mycat5_gain = (base_time - mycat5.time_ms) / base_time * 100.0;
        if mycat5_gain > 0.0 {
            println!(
                "{}",
                format!(
                    "5. {} ({}): *** CHAMPION! {:.1}% faster than system cat",
                    mycat5.label, mycat5.description, mycat5_gain
                )
                .green()
            );
        } else {
            println!(
                "5. {} ({}): Very close performance, {:.1}% slower than system cat",
                mycat5.label,
                mycat5.description,
                mycat5_gain.abs()
            );
        }
        if let Some(mycat6) = self.entry("mycat6") {
            println!(
                "6. {} ({}): Minor performance loss compared to {}",
                mycat6.label, mycat6.description, mycat5.label
            );
        }
    }

    fn print_champion_details(&self, base_time: f64) {
        let Some(winner) = self.winner() else {
            return;
        };

        println!();
        println!("{}", "*** CHAMPION DETAILS:".bold());
        println!("{}", "-".repeat(30));
        println!("Best Implementation: {}", winner.label.green());
        println!("Execution Time: {:.1}ms", winner.time_ms);
        let winner_gain = (base_time - winner.time_ms) / base_time * 100.0;
        if winner_gain > 0.0 {
            println!(
                "Performance Gain: {:.1}% faster than system cat",
                winner_gain
            );
        } else {
            println!(
                "Performance: {:.1}% slower than system cat (very close!)",
                winner_gain.abs()
            );
        }
    }

    fn print_journey(&self, base_time: f64) {
        let Some((mycat1, mycat2, mycat5)) = self.narrative_entries() else {
            return;
        };

        let step_one = (mycat1.time_ms - mycat2.time_ms) / mycat1.time_ms * 100.0;
        let step_two = (mycat2.time_ms - mycat5.time_ms) / mycat2.time_ms * 100.0;
        let total = (mycat1.time_ms - mycat5.time_ms) / mycat1.time_ms * 100.0;
        let final_gain = (base_time - mycat5.time_ms) / base_time * 100.0;

        println!();
        println!("{}", "*** OPTIMIZATION JOURNEY:".bold());
        println!("{}", "-".repeat(35));
        println!(
            "Step 1 (Add buffer): {:.2}% improvement over naive version",
            step_one
        );
        println!(
            "Step 2 (Optimize buffer size): {:.1}% improvement over basic buffer",
            step_two
        );
        println!(
            "Total improvement: {:.3}% faster than naive implementation",
            total
        );
        if final_gain > 0.0 {
            println!(
                "Final achievement: Beat GNU coreutils cat by {:.1}%!",
                final_gain
            );
        } else {
            println!(
                "Final achievement: Came very close to system cat performance ({:.1}% difference)!",
                final_gain.abs()
            );
        }
    }

    fn print_insights(&self) {
        println!();
        println!("{}", "*** KEY INSIGHTS:".bold());
        println!("{}", "-".repeat(25));
        println!("• Buffer size optimization is the most critical factor");
        println!("• System call overhead is the primary bottleneck");
        println!("• Theoretical optimizations don't always work in practice");
        println!("• Experimental validation beats theoretical analysis");
        println!("• Simple solutions often outperform complex ones");
    }

    fn narrative_entries(&self) -> Option<(&SummaryEntry, &SummaryEntry, &SummaryEntry)> {
        Some((
            self.entry("mycat1")?,
            self.entry("mycat2")?,
            self.entry("mycat5")?,
        ))
    }
}
