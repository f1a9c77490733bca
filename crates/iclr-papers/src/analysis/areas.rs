//! Per-area paper counts and reply activity.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::PaperRecord;

/// Label used for records without an area.
pub const UNSPECIFIED_AREA: &str = "unspecified";

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical regex pattern"));

/// Collapse an area label to its main part.
///
/// Drops parenthesized qualifiers and everything after the first comma, so
/// "applications to robotics, autonomy, planning" becomes "applications to robotics".
#[must_use]
pub fn normalize_area(area: &str) -> String {
    let stripped = PARENTHETICAL.replace_all(area, "");
    let main = stripped.split(',').next().unwrap_or_default().trim();
    if main.is_empty() { UNSPECIFIED_AREA.to_string() } else { main.to_string() }
}

/// Aggregate for one area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaStats {
    /// Normalized area label.
    pub area: String,
    /// Papers in the area.
    pub count: usize,
    /// Mean reply count of those papers.
    pub mean_reply_count: f64,
}

/// Group records by normalized area. Ordered by count descending, then name.
#[must_use]
pub fn group_by_area(records: &[PaperRecord]) -> Vec<AreaStats> {
    let mut groups: HashMap<String, (usize, u64)> = HashMap::new();
    for record in records {
        let entry = groups.entry(normalize_area(&record.primary_area)).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(record.reply_count);
    }

    let mut stats: Vec<AreaStats> = groups
        .into_iter()
        .map(|(area, (count, replies))| AreaStats {
            area,
            count,
            mean_reply_count: replies as f64 / count as f64,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.area.cmp(&b.area)));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(area: &str, replies: u32) -> PaperRecord {
        PaperRecord { primary_area: area.to_string(), reply_count: replies, ..Default::default() }
    }

    #[test]
    fn test_normalize_area() {
        assert_eq!(
            normalize_area("applications to robotics, autonomy, planning"),
            "applications to robotics"
        );
        assert_eq!(
            normalize_area("learning on graphs and other geometries & topologies (GNNs)"),
            "learning on graphs and other geometries & topologies"
        );
        assert_eq!(normalize_area("  "), UNSPECIFIED_AREA);
        assert_eq!(normalize_area("(only qualifier)"), UNSPECIFIED_AREA);
    }

    #[test]
    fn test_mean_reply_count() {
        let records = vec![paper("ML", 2), paper("ML", 5), paper("ML", 9)];
        let stats = group_by_area(&records);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].area, "ML");
        assert_eq!(stats[0].count, 3);
        assert!((stats[0].mean_reply_count - 5.333).abs() < 1e-3);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let records = vec![paper("a", 1), paper("b", 2), paper("a", 3), paper("", 0), paper("c, d", 4)];
        let stats = group_by_area(&records);
        assert_eq!(stats.iter().map(|s| s.count).sum::<usize>(), records.len());
        assert_eq!(stats[0].area, "a");
    }
}
