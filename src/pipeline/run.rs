// src/pipeline/run.rs

//! Full report pipeline: fetch, rank, write the report files, and deliver
//! the concatenated Markdown tables as private messages.

use std::fs;

use crate::error::Result;
use crate::models::Config;
use crate::report::csv::write_csv;
use crate::report::markdown::{general_table, powerplay_table};
use crate::report::{ReportPaths, current_month_name};
use crate::services::{MessageSink, TrafficClient};

use super::fetch::fetch_all;
use super::rank::{rank_by_average, sort_powerplay, split_powerplay};

/// Separator between the general and powerplay tables in the message body.
pub const MESSAGE_SEPARATOR: &str = "\n\n____\n\n";

/// Subject line for the report message. The report is generated on the
/// first of the month.
pub fn message_subject(month_name: &str) -> String {
    format!(
        "Automated Elite subreddit traffic report generated on {} 1st",
        month_name
    )
}

/// Run the full pipeline.
///
/// Report files are always written; messages are only sent when a sink is
/// given. Every record is fetched before anything is written, so a fetch
/// failure leaves no partial report behind.
pub async fn run_pipeline(config: &Config, sink: Option<&dyn MessageSink>) -> Result<()> {
    let month_name = current_month_name();
    let paths = ReportPaths::new(&config.report, &month_name);
    fs::create_dir_all(&config.report.output_dir)?;

    let client = TrafficClient::new(config.fetch.clone())?;
    let records = fetch_all(config, &client).await?;
    log::info!("Fetched traffic data for {} forums", records.len());

    // CSV covers the whole roster in fetch order, before any ranking.
    write_csv(&paths.csv, &records)?;
    log::info!("Wrote {}", paths.csv.display());

    let (general, affiliated) = split_powerplay(records, &config.powerplay);
    let general_ranked = rank_by_average(general);
    let affiliated_sorted = sort_powerplay(affiliated);

    let general_md = general_table(&general_ranked);
    fs::write(&paths.markdown, &general_md)?;
    log::info!("Wrote {}", paths.markdown.display());

    let powerplay_md = powerplay_table(&affiliated_sorted);
    fs::write(&paths.powerplay, &powerplay_md)?;
    log::info!("Wrote {}", paths.powerplay.display());

    if let Some(sink) = sink {
        let subject = message_subject(&month_name);
        let body = format!("{}{}{}", general_md, MESSAGE_SEPARATOR, powerplay_md);

        log::info!("Sending message to {} recipients", config.reddit.recipients.len());
        for recipient in &config.reddit.recipients {
            sink.send(recipient, &subject, &body).await?;
        }
    } else {
        log::info!("Message delivery skipped");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tempfile::TempDir;

    use crate::models::ForumInfo;

    use super::*;

    /// Sink that records every message instead of delivering it.
    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl MessageSink for RecordingSink {
        async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
            self.sent.lock().unwrap().push((
                recipient.to_string(),
                subject.to_string(),
                body.to_string(),
            ));
            Ok(())
        }
    }

    /// A roster whose forums are all on the exclusion list, so the
    /// pipeline runs without touching the network.
    fn offline_config(output_dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.forums = vec![
            ForumInfo {
                name: "EliteOne".into(),
                description: "Xbox One CMDRs".into(),
            },
            ForumInfo {
                name: "EliteMahon".into(),
                description: "Edmund Mahon".into(),
            },
        ];
        config.powerplay.retain(|pp| pp.name == "EliteMahon");
        config.no_traffic = vec!["EliteOne".into(), "EliteMahon".into()];
        config.report.output_dir = output_dir.to_string_lossy().into_owned();
        config
    }

    #[tokio::test]
    async fn test_run_pipeline_writes_reports_and_sends() {
        let tmp = TempDir::new().unwrap();
        let config = offline_config(tmp.path());
        let sink = RecordingSink::default();

        run_pipeline(&config, Some(&sink)).await.unwrap();

        let month_name = current_month_name();
        let paths = ReportPaths::new(&config.report, &month_name);

        let csv = std::fs::read_to_string(&paths.csv).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.starts_with("0,EliteOne,N/A,N/A,N/A,N/A"));

        let general = std::fs::read_to_string(&paths.markdown).unwrap();
        assert!(general.starts_with("Subreddit|Description|Popularity\n:-:|:-:|:-:\n"));
        assert!(general.contains("[/r/EliteOne]"));
        assert!(!general.contains("EliteMahon"));

        let powerplay = std::fs::read_to_string(&paths.powerplay).unwrap();
        assert!(powerplay.starts_with("SuperPower|Power|Subreddit|Popularity\n"));
        assert!(powerplay.contains("Alliance|Edmund Mahon|[/r/EliteMahon]"));

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, "Always_SFW");
        assert_eq!(sent[1].0, "StuartGT");
        // Identical body per recipient: both tables joined by the separator.
        assert_eq!(sent[0].2, sent[1].2);
        assert_eq!(
            sent[0].2,
            format!("{}{}{}", general, MESSAGE_SEPARATOR, powerplay)
        );
        assert_eq!(sent[0].1, message_subject(&month_name));
    }

    #[tokio::test]
    async fn test_run_pipeline_without_sink_skips_delivery() {
        let tmp = TempDir::new().unwrap();
        let config = offline_config(tmp.path());

        run_pipeline(&config, None).await.unwrap();

        let paths = ReportPaths::new(&config.report, &current_month_name());
        assert!(paths.csv.exists());
        assert!(paths.markdown.exists());
        assert!(paths.powerplay.exists());
    }

    #[test]
    fn test_message_subject() {
        assert_eq!(
            message_subject("February"),
            "Automated Elite subreddit traffic report generated on February 1st"
        );
    }

}
