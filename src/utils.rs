use crate::models::ChannelStatistics;

const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Abbreviates a count for display: exact below 1,000, one decimal digit
/// plus a K/M/B/T suffix from 1,000 up (1,200 -> "1.2K").
pub fn format_count(value: u64) -> String {
    for (threshold, suffix) in SUFFIXES {
        if value as f64 >= threshold {
            return format!("{:.1}{}", value as f64 / threshold, suffix);
        }
    }
    value.to_string()
}

/// Counts arrive decimal-string encoded from the platform; parse first.
/// Unparseable input formats as zero.
pub fn format_count_str(value: &str) -> String {
    format_count(value.trim().parse().unwrap_or(0))
}

/// Subscriber counts can be hidden by the channel owner, in which case the
/// literal "Hidden" marker is shown instead of a number.
pub fn format_subscriber_count(stats: &ChannelStatistics) -> String {
    if stats.hidden_subscriber_count {
        "Hidden".to_string()
    } else {
        format_count_str(&stats.subscriber_count)
    }
}
