// src/report/csv.rs

//! CSV report writer.
//!
//! One row per forum in fetch order, unfiltered: the powerplay forums are
//! included and no ranking is applied. Forums without traffic data get the
//! literal `N/A` in every traffic column. No header row.

use std::path::Path;

use crate::error::Result;
use crate::models::ForumRecord;

const NOT_AVAILABLE: &str = "N/A";

/// Write the CSV report: `(index, name, traffic_url, uniques, views, average)`.
pub fn write_csv(path: &Path, records: &[ForumRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for (index, record) in records.iter().enumerate() {
        let row = match &record.traffic {
            Some(traffic) => [
                index.to_string(),
                record.name.clone(),
                traffic.traffic_url.clone(),
                traffic.uniques.to_string(),
                traffic.views.to_string(),
                traffic.bimonthly_uniques_average.to_string(),
            ],
            None => [
                index.to_string(),
                record.name.clone(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
            ],
        };
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForumTraffic;
    use crate::utils::traffic_url;
    use tempfile::TempDir;

    fn sample_records() -> Vec<ForumRecord> {
        vec![
            ForumRecord::with_traffic(
                "EliteOne",
                "Xbox One CMDRs",
                ForumTraffic {
                    traffic_url: traffic_url("EliteOne"),
                    uniques: 1035,
                    views: 9967,
                    bimonthly_uniques_average: 1044,
                },
            ),
            ForumRecord::without_traffic("EliteDangerousPics", "Pictures"),
        ]
    }

    #[test]
    fn test_write_csv_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.csv");

        write_csv(&path, &sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "0,EliteOne,https://www.reddit.com/r/EliteOne/about/traffic/.json,1035,9967,1044"
        );
        assert_eq!(lines[1], "1,EliteDangerousPics,N/A,N/A,N/A,N/A");
    }

    #[test]
    fn test_row_count_matches_input() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.csv");

        let records: Vec<ForumRecord> = (0..7)
            .map(|i| ForumRecord::without_traffic(&format!("Forum{}", i), "desc"))
            .collect();
        write_csv(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), records.len());
    }
}
