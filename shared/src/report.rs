//! Dashboard aggregation helpers
//!
//! Pure count-by-status summaries over already-fetched collections, plus the
//! certificate eligibility rule. No network calls happen here.

use serde::{Deserialize, Serialize};

use crate::lifecycle::RequestStatus;
use crate::models::Request;

/// Minimum completed pickups before a user may generate a certificate.
pub const CERTIFICATE_MIN_COMPLETED: u64 = 10;

/// Whether a user qualifies for the recycling certificate.
pub fn is_eligible_for_certificate(completed_count: u64) -> bool {
    completed_count >= CERTIFICATE_MIN_COMPLETED
}

/// Count-by-status summary of a request collection
///
/// Also the wire shape of the backend's `/user/{id}/stats` response, which
/// may omit counters it does not track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub approved: u64,
    #[serde(default)]
    pub scheduled: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub rejected: u64,
}

impl StatusSummary {
    pub fn is_certificate_eligible(&self) -> bool {
        is_eligible_for_certificate(self.completed)
    }
}

/// Summarize a request collection by status.
///
/// Pure and order-insensitive; reordering the input never changes the result.
pub fn summarize<'a, I>(requests: I) -> StatusSummary
where
    I: IntoIterator<Item = &'a Request>,
{
    let mut summary = StatusSummary::default();
    for request in requests {
        summary.total += 1;
        match request.status {
            RequestStatus::Pending => summary.pending += 1,
            RequestStatus::Approved => summary.approved += 1,
            RequestStatus::Scheduled => summary.scheduled += 1,
            RequestStatus::Completed => summary.completed += 1,
            RequestStatus::Rejected => summary.rejected += 1,
        }
    }
    summary
}

/// One point of the illustrative dashboard trend line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPoint {
    pub label: String,
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub completed: u64,
}

/// Distribute current totals proportionally across ordered month labels.
///
/// This synthesizes a cumulative trend from a single snapshot; it is display
/// filler, not a time series of real historical data. Each counter grows by
/// `round(value * (i + 1) / n)`, so the series is non-decreasing and the last
/// point equals the current totals.
pub fn bucket_by_month(summary: &StatusSummary, labels: &[&str]) -> Vec<MonthPoint> {
    let n = labels.len();
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let factor = (i + 1) as f64 / n as f64;
            let scale = |value: u64| (value as f64 * factor).round() as u64;
            MonthPoint {
                label: (*label).to_string(),
                total: scale(summary.total),
                pending: scale(summary.pending),
                approved: scale(summary.approved),
                completed: scale(summary.completed),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_status(status: &str) -> Request {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "type": "Laptop",
            "pickupLocation": "somewhere",
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_summarize_counts_by_status() {
        let requests = vec![
            request_with_status("PENDING"),
            request_with_status("PENDING"),
            request_with_status("COMPLETED"),
        ];
        let summary = summarize(&requests);
        assert_eq!(
            summary,
            StatusSummary {
                total: 3,
                pending: 2,
                approved: 0,
                scheduled: 0,
                completed: 1,
                rejected: 0,
            }
        );
    }

    #[test]
    fn test_summarize_is_order_insensitive() {
        let mut requests = vec![
            request_with_status("PENDING"),
            request_with_status("APPROVED"),
            request_with_status("SCHEDULED"),
            request_with_status("REJECTED"),
        ];
        let forward = summarize(&requests);
        requests.reverse();
        assert_eq!(summarize(&requests), forward);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize([]), StatusSummary::default());
    }

    #[test]
    fn test_certificate_threshold() {
        assert!(!is_eligible_for_certificate(9));
        assert!(is_eligible_for_certificate(10));
        assert!(is_eligible_for_certificate(15));
    }

    #[test]
    fn test_stats_decode_with_missing_counters() {
        // The backend stats map has no scheduled/rejected entries.
        let summary: StatusSummary =
            serde_json::from_str(r#"{"total": 15, "pending": 3, "approved": 0, "completed": 12}"#)
                .unwrap();
        assert_eq!(summary.total, 15);
        assert_eq!(summary.scheduled, 0);
        assert!(summary.is_certificate_eligible());
    }

    #[test]
    fn test_bucket_by_month_is_cumulative_and_exact_at_the_end() {
        let summary = StatusSummary {
            total: 15,
            pending: 3,
            approved: 0,
            scheduled: 0,
            completed: 12,
            rejected: 0,
        };
        let labels = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
        let points = bucket_by_month(&summary, &labels);
        assert_eq!(points.len(), 6);

        for pair in points.windows(2) {
            assert!(pair[1].total >= pair[0].total);
            assert!(pair[1].pending >= pair[0].pending);
            assert!(pair[1].completed >= pair[0].completed);
        }

        let last = points.last().unwrap();
        assert_eq!(last.label, "Jun");
        assert_eq!(last.total, 15);
        assert_eq!(last.pending, 3);
        assert_eq!(last.completed, 12);
    }

    #[test]
    fn test_bucket_by_month_empty_labels() {
        let points = bucket_by_month(&StatusSummary::default(), &[]);
        assert!(points.is_empty());
    }
}
