use meowlab_bench_report::summary::SummaryEntry;
use meowlab_cat::Strategy;

pub const BASELINE_LABEL: &str = "System cat";
pub const OUTLIER_LABEL: &str = "mycat1";

const BASELINE_DESCRIPTION: &str = "GNU coreutils cat";
const BASELINE_TIME_MS: f64 = 252.7;

// Execution times recorded on the lab machine, one per copy strategy in
// mycat1..mycat6 order.
const STRATEGY_TIMES_MS: [f64; 6] = [870_518.0, 380.1, 408.0, 409.9, 265.1, 280.3];

/// The fixed measurement table: the system cat baseline followed by the six
/// mycat implementations. Nothing is measured at runtime.
pub fn entries() -> Vec<SummaryEntry> {
    let mut entries = vec![SummaryEntry::new(
        BASELINE_LABEL.to_string(),
        BASELINE_DESCRIPTION.to_string(),
        BASELINE_TIME_MS,
    )];

    entries.extend(
        Strategy::ALL
            .iter()
            .zip(STRATEGY_TIMES_MS)
            .map(|(strategy, time_ms)| {
                SummaryEntry::new(
                    strategy.label().to_string(),
                    strategy.describe().to_string(),
                    time_ms,
                )
            }),
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_comes_first() {
        let entries = entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].label, BASELINE_LABEL);
        assert_eq!(entries[0].time_ms, 252.7);
    }

    #[test]
    fn strategies_appear_in_mycat_order_with_recorded_times() {
        let entries = entries();
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "System cat",
                "mycat1",
                "mycat2",
                "mycat3",
                "mycat4",
                "mycat5",
                "mycat6"
            ]
        );
        assert_eq!(entries[1].time_ms, 870_518.0);
        assert_eq!(entries[5].time_ms, 265.1);
    }

    #[test]
    fn descriptions_follow_the_strategy_names() {
        let entries = entries();
        assert_eq!(entries[1].description, "byte-by-byte");
        assert_eq!(entries[2].description, "add buffer");
        assert_eq!(entries[5].description, "optimized buffer");
        assert_eq!(entries[6].description, "fadvise");
    }
}
