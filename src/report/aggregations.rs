//! Built-in report aggregations.
//!
//! Each aggregation makes one pass over the record store, groups records by a
//! key in first-encounter order, then sorts groups by descending count. The
//! sort is stable, so groups with equal counts keep the order they were first
//! seen in.

use std::collections::HashMap;

use crate::config::{PERCENTAGE_PRECISION, RESPONSE_TIME_PRECISION};
use crate::loader::RecordStore;
use crate::report::row::{round_to, ReportRow};
use crate::report::user_agent::classify_user_agent;

/// Groups keyed values while remembering the order keys first appeared in.
struct GroupTable<S> {
    index: HashMap<String, usize>,
    groups: Vec<(String, S)>,
}

impl<S: Default> GroupTable<S> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn entry(&mut self, key: &str) -> &mut S {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.groups.push((key.to_string(), S::default()));
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[slot].1
    }

    /// Groups sorted by descending `count`, ties in first-encounter order.
    fn into_sorted(self, count: impl Fn(&S) -> u64) -> Vec<(String, S)> {
        let mut groups = self.groups;
        groups.sort_by(|(_, a), (_, b)| count(b).cmp(&count(a)));
        groups
    }
}

#[derive(Debug, Default)]
struct EndpointStat {
    requests: u64,
    total_response_time: f64,
}

impl EndpointStat {
    fn average(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        self.total_response_time / self.requests as f64
    }
}

/// `average`: request count and mean `response_time` per `url`.
///
/// Records without a truthy `url` or a numeric `response_time` are ignored.
pub fn average_report(store: &RecordStore) -> Vec<ReportRow> {
    let mut table: GroupTable<EndpointStat> = GroupTable::new();

    for record in store {
        let (Some(url), Some(response_time)) = (record.url(), record.response_time()) else {
            continue;
        };
        let stat = table.entry(&url);
        stat.requests += 1;
        stat.total_response_time += response_time;
    }

    table
        .into_sorted(|stat| stat.requests)
        .into_iter()
        .map(|(handler, stat)| {
            ReportRow::new()
                .with("handler", handler)
                .with("total", stat.requests)
                .with(
                    "avg_response_time",
                    round_to(stat.average(), RESPONSE_TIME_PRECISION),
                )
        })
        .collect()
}

/// `user_agent`: share of requests per browser family.
///
/// Records with an absent or empty `http_user_agent` are left out of both
/// the counts and the denominator.
pub fn user_agent_report(store: &RecordStore) -> Vec<ReportRow> {
    let labels = store
        .iter()
        .filter_map(|record| record.user_agent())
        .map(|ua| classify_user_agent(ua).as_str().to_string());
    distribution_rows("browser", labels)
}

/// `status`: share of requests per status code.
///
/// Any non-null `status` counts; numeric and string codes share a group.
pub fn status_report(store: &RecordStore) -> Vec<ReportRow> {
    let statuses = store.iter().filter_map(|record| record.status());
    distribution_rows("status", statuses)
}

/// Counts `keys` and emits `{<label_column>, requests, percentage}` rows.
fn distribution_rows(label_column: &str, keys: impl Iterator<Item = String>) -> Vec<ReportRow> {
    let mut table: GroupTable<u64> = GroupTable::new();
    let mut total: u64 = 0;

    for key in keys {
        *table.entry(&key) += 1;
        total += 1;
    }

    table
        .into_sorted(|count| *count)
        .into_iter()
        .map(|(label, count)| {
            let percentage = count as f64 / total as f64 * 100.0;
            ReportRow::new()
                .with(label_column, label)
                .with("requests", count)
                .with("percentage", round_to(percentage, PERCENTAGE_PRECISION))
        })
        .collect()
}
