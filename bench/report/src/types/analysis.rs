use crate::measurement::SweepMeasurement;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Share of the peak throughput a multiplier has to reach to qualify as
/// recommended.
pub const RECOMMENDATION_THRESHOLD: f64 = 0.9;

/// Optimum statistics derived from the successful sweep measurements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepAnalysis {
    #[serde(serialize_with = "round_float")]
    pub max_throughput_mb_s: f64,
    pub optimal_multiplier: u32,
    pub optimal_buffer_size_bytes: u64,
    #[serde(serialize_with = "round_float")]
    pub threshold_mb_s: f64,
    pub recommended_multiplier: u32,
    #[serde(serialize_with = "round_float")]
    pub baseline_improvement_percent: f64,
}

impl SweepAnalysis {
    /// Computes the optimum over the successful measurements, or `None` when
    /// every invocation failed. The first occurrence wins a throughput tie
    /// and the first measurement serves as the baseline.
    pub fn from_measurements(measurements: &[SweepMeasurement]) -> Option<Self> {
        let baseline = measurements.first()?;
        let optimal = measurements.iter().reduce(|best, candidate| {
            if candidate.throughput_mb_s > best.throughput_mb_s {
                candidate
            } else {
                best
            }
        })?;
        let threshold = optimal.throughput_mb_s * RECOMMENDATION_THRESHOLD;
        let recommended = measurements
            .iter()
            .filter(|m| m.throughput_mb_s >= threshold)
            .map(|m| m.multiplier)
            .min()
            .unwrap_or(optimal.multiplier);
        let improvement = (optimal.throughput_mb_s - baseline.throughput_mb_s)
            / baseline.throughput_mb_s
            * 100.0;

        Some(Self {
            max_throughput_mb_s: optimal.throughput_mb_s,
            optimal_multiplier: optimal.multiplier,
            optimal_buffer_size_bytes: optimal.buffer_size_bytes,
            threshold_mb_s: threshold,
            recommended_multiplier: recommended,
            baseline_improvement_percent: improvement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::ThroughputSource;

    fn measurement(multiplier: u32, throughput_mb_s: f64) -> SweepMeasurement {
        SweepMeasurement::new(
            multiplier,
            4096 * multiplier as u64,
            1.0,
            throughput_mb_s,
            ThroughputSource::Reported,
        )
    }

    #[test]
    fn empty_measurements_yield_no_analysis() {
        assert_eq!(SweepAnalysis::from_measurements(&[]), None);
    }

    #[test]
    fn optimum_is_argmax_with_first_tie_winning() {
        let measurements = [
            measurement(1, 80.0),
            measurement(2, 120.0),
            measurement(4, 120.0),
            measurement(8, 100.0),
        ];
        let analysis = SweepAnalysis::from_measurements(&measurements).unwrap();
        assert_eq!(analysis.optimal_multiplier, 2);
        assert_eq!(analysis.optimal_buffer_size_bytes, 8192);
        assert_eq!(analysis.max_throughput_mb_s, 120.0);
    }

    #[test]
    fn recommended_is_smallest_multiplier_above_threshold() {
        let measurements = [
            measurement(1, 50.0),
            measurement(2, 100.0),
            measurement(4, 95.0),
        ];
        let analysis = SweepAnalysis::from_measurements(&measurements).unwrap();
        assert_eq!(analysis.optimal_multiplier, 2);
        assert_eq!(analysis.threshold_mb_s, 90.0);
        assert_eq!(analysis.recommended_multiplier, 2);
        assert_eq!(analysis.baseline_improvement_percent, 100.0);
    }

    #[test]
    fn recommended_picks_smallest_multiplier_even_out_of_order() {
        let measurements = [
            measurement(16, 100.0),
            measurement(2, 96.0),
            measurement(8, 98.0),
        ];
        let analysis = SweepAnalysis::from_measurements(&measurements).unwrap();
        assert_eq!(analysis.optimal_multiplier, 16);
        assert_eq!(analysis.recommended_multiplier, 2);
    }

    #[test]
    fn recommendation_never_exceeds_the_optimum() {
        let measurements = [
            measurement(1, 91.0),
            measurement(2, 95.0),
            measurement(4, 100.0),
        ];
        let analysis = SweepAnalysis::from_measurements(&measurements).unwrap();
        assert_eq!(analysis.optimal_multiplier, 4);
        assert_eq!(analysis.recommended_multiplier, 1);
        assert!(analysis.recommended_multiplier <= analysis.optimal_multiplier);
        let recommended_throughput = measurements
            .iter()
            .find(|m| m.multiplier == analysis.recommended_multiplier)
            .unwrap()
            .throughput_mb_s;
        assert!(recommended_throughput >= analysis.threshold_mb_s);
    }

    #[test]
    fn baseline_is_first_successful_measurement() {
        let measurements = [measurement(4, 50.0), measurement(8, 75.0)];
        let analysis = SweepAnalysis::from_measurements(&measurements).unwrap();
        assert_eq!(analysis.baseline_improvement_percent, 50.0);
    }
}
