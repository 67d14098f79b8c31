use tracing::warn;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Scans dd diagnostic text for a throughput token and normalizes it to MB/s.
///
/// Lines are scanned top to bottom, tokens left to right; the first token
/// carrying a recognized unit wins. `bytes/sec` rates are divided by 1024²,
/// `MB/s` rates are taken as-is and `GB/s` rates are multiplied by 1024. The
/// numeric token precedes the unit token and may be wrapped in `(`, `)` or
/// `,` (the BSD dd format). A rate that does not parse as a number is logged
/// and skipped, so locale variants degrade to the wall-clock estimate instead
/// of failing the run.
pub fn parse_throughput_mb_s(diagnostics: &str) -> Option<f64> {
    for line in diagnostics.lines() {
        if !line.contains("bytes/sec") && !line.contains("MB/s") && !line.contains("GB/s") {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        for (i, part) in parts.iter().enumerate() {
            let scale = if part.contains("bytes/sec") {
                1.0 / BYTES_PER_MB
            } else if part.contains("MB/s") {
                1.0
            } else if part.contains("GB/s") {
                1024.0
            } else {
                continue;
            };

            if i == 0 {
                continue;
            }

            let raw = parts[i - 1].trim_matches(|c| c == '(' || c == ')' || c == ',');
            match raw.parse::<f64>() {
                Ok(rate) => return Some(rate * scale),
                Err(_) => {
                    warn!("Unparsable rate '{raw}' next to '{part}' in dd output: {line}");
                    continue;
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_per_sec_rate_is_divided_by_mebibyte() {
        assert_eq!(parse_throughput_mb_s("104857600 bytes/sec"), Some(100.0));
    }

    #[test]
    fn mb_per_sec_rate_is_taken_as_is() {
        assert_eq!(parse_throughput_mb_s("copied, 0.5 s, 100 MB/s"), Some(100.0));
    }

    #[test]
    fn gb_per_sec_rate_is_multiplied_by_1024() {
        assert_eq!(parse_throughput_mb_s("copied, 0.2 s, 2.5 GB/s"), Some(2560.0));
    }

    #[test]
    fn parses_gnu_dd_progress_line() {
        let line = "536870912 bytes (537 MB, 512 MiB) copied, 0.195763 s, 2.7 GB/s";
        assert_eq!(parse_throughput_mb_s(line), Some(2.7 * 1024.0));
    }

    #[test]
    fn parses_bsd_dd_parenthesized_rate() {
        let line = "536870912 bytes transferred in 5.120000 secs (104857600 bytes/sec)";
        assert_eq!(parse_throughput_mb_s(line), Some(100.0));
    }

    #[test]
    fn first_matching_token_wins() {
        let line = "burst 512 MB/s average 1 GB/s";
        assert_eq!(parse_throughput_mb_s(line), Some(512.0));
    }

    #[test]
    fn scans_past_lines_without_rates() {
        let diagnostics = "131072+0 records in\n131072+0 records out\n\
536870912 bytes (537 MB, 512 MiB) copied, 0.5 s, 1.1 GB/s";
        assert_eq!(parse_throughput_mb_s(diagnostics), Some(1.1 * 1024.0));
    }

    #[test]
    fn text_without_rate_tokens_yields_none() {
        assert_eq!(parse_throughput_mb_s("131072+0 records in"), None);
        assert_eq!(parse_throughput_mb_s(""), None);
    }

    #[test]
    fn unit_token_without_preceding_number_is_skipped() {
        assert_eq!(parse_throughput_mb_s("MB/s 100"), None);
    }

    #[test]
    fn malformed_rate_next_to_unit_is_skipped() {
        assert_eq!(parse_throughput_mb_s("running at MB/s for now"), None);
        // A later valid token still wins after a malformed one
        assert_eq!(
            parse_throughput_mb_s("speedy MB/s rate, actual 100 MB/s"),
            Some(100.0)
        );
    }
}
