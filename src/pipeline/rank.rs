// src/pipeline/rank.rs

//! Popularity ranking.
//!
//! General forums are ordered descending by the bimonthly uniques average;
//! forums without traffic data go last, keeping their relative input order.
//! Powerplay forums are reported separately, ordered by description.

use std::cmp::Ordering;

use crate::models::{ForumRecord, PowerplayInfo};

/// Order records descending by average, no-data entries last.
///
/// The sort is stable, so tied averages keep their input order (first-seen
/// wins) and the relative order of no-data entries is preserved.
pub fn rank_by_average(mut records: Vec<ForumRecord>) -> Vec<ForumRecord> {
    records.sort_by(|a, b| match (a.average(), b.average()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    records
}

/// Split records into (general, powerplay), preserving input order within
/// each half, and assign each powerplay record its allegiance.
pub fn split_powerplay(
    records: Vec<ForumRecord>,
    powerplay: &[PowerplayInfo],
) -> (Vec<ForumRecord>, Vec<ForumRecord>) {
    let mut general = Vec::new();
    let mut affiliated = Vec::new();

    for mut record in records {
        match powerplay.iter().find(|pp| pp.name == record.name) {
            Some(pp) => {
                record.allegiance = Some(pp.allegiance.clone());
                affiliated.push(record);
            }
            None => general.push(record),
        }
    }

    (general, affiliated)
}

/// Order powerplay records ascending by description text. Stable.
pub fn sort_powerplay(mut records: Vec<ForumRecord>) -> Vec<ForumRecord> {
    records.sort_by(|a, b| a.description.cmp(&b.description));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForumTraffic;
    use crate::utils::traffic_url;

    fn record(name: &str, average: Option<u64>) -> ForumRecord {
        match average {
            Some(average) => ForumRecord::with_traffic(
                name,
                &format!("About {}", name),
                ForumTraffic {
                    traffic_url: traffic_url(name),
                    uniques: average,
                    views: average * 10,
                    bimonthly_uniques_average: average,
                },
            ),
            None => ForumRecord::without_traffic(name, &format!("About {}", name)),
        }
    }

    fn names(records: &[ForumRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_distinct_averages_rank_descending() {
        let ranked = rank_by_average(vec![
            record("A", Some(10)),
            record("B", Some(30)),
            record("C", Some(20)),
        ]);
        assert_eq!(names(&ranked), ["B", "C", "A"]);
    }

    #[test]
    fn test_ties_break_by_input_order() {
        // Averages [10, 50, 50, 5] for [A, B, C, D] rank as [B, C, A, D].
        let ranked = rank_by_average(vec![
            record("A", Some(10)),
            record("B", Some(50)),
            record("C", Some(50)),
            record("D", Some(5)),
        ]);
        assert_eq!(names(&ranked), ["B", "C", "A", "D"]);
    }

    #[test]
    fn test_no_data_entries_go_last_in_input_order() {
        let ranked = rank_by_average(vec![
            record("A", None),
            record("B", Some(5)),
            record("C", None),
            record("D", Some(50)),
        ]);
        assert_eq!(names(&ranked), ["D", "B", "A", "C"]);
    }

    #[test]
    fn test_split_assigns_allegiances() {
        let powerplay = vec![
            PowerplayInfo {
                name: "P1".into(),
                allegiance: "Empire".into(),
            },
            PowerplayInfo {
                name: "P2".into(),
                allegiance: "Federation".into(),
            },
        ];
        let (general, affiliated) = split_powerplay(
            vec![
                record("A", Some(10)),
                record("P1", Some(20)),
                record("B", None),
                record("P2", Some(30)),
            ],
            &powerplay,
        );

        assert_eq!(names(&general), ["A", "B"]);
        assert_eq!(names(&affiliated), ["P1", "P2"]);
        assert_eq!(affiliated[0].allegiance.as_deref(), Some("Empire"));
        assert_eq!(affiliated[1].allegiance.as_deref(), Some("Federation"));
        assert!(general.iter().all(|r| r.allegiance.is_none()));
    }

    #[test]
    fn test_powerplay_sorts_by_description() {
        let mut a = record("X", Some(1));
        a.description = "Zemina Torval".into();
        let mut b = record("Y", Some(2));
        b.description = "Aisling Duval".into();
        let mut c = record("Z", Some(3));
        c.description = "Edmund Mahon".into();

        let sorted = sort_powerplay(vec![a, b, c]);
        let descriptions: Vec<&str> = sorted.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(
            descriptions,
            ["Aisling Duval", "Edmund Mahon", "Zemina Torval"]
        );
    }
}
