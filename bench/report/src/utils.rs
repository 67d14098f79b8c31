use serde::Serializer;

/// Serializes a float rounded to three decimal places to keep report JSON
/// files readable.
pub fn round_float<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 1000.0).round() / 1000.0)
}

pub fn min(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}

pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

pub fn avg(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

pub fn std_dev(data: &[f64]) -> Option<f64> {
    let mean = avg(data)?;
    let variance = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / data.len() as f64;
    Some(variance.sqrt())
}

/// Formats an integer with thousands separators, e.g. `524288` as `524,288`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_over_samples() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(min(&data), Some(2.0));
        assert_eq!(max(&data), Some(9.0));
        assert_eq!(avg(&data), Some(5.0));
        assert_eq!(std_dev(&data), Some(2.0));
    }

    #[test]
    fn stats_over_empty_input() {
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(avg(&[]), None);
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn single_sample_has_zero_deviation() {
        assert_eq!(std_dev(&[42.0]), Some(0.0));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(4096), "4,096");
        assert_eq!(group_thousands(524_288), "524,288");
        assert_eq!(group_thousands(1_048_576), "1,048,576");
    }
}
