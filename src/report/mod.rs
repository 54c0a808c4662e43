// src/report/mod.rs

//! Report writers: one CSV file and two Markdown pipe tables.

pub mod csv;
pub mod markdown;

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::models::ReportConfig;

/// Locations of the three report files for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// `<prefix>_<MonthName>.csv`
    pub csv: PathBuf,

    /// `<prefix>_md_<MonthName>.md`
    pub markdown: PathBuf,

    /// `<prefix>_pp_md_<MonthName>.md`
    pub powerplay: PathBuf,
}

impl ReportPaths {
    /// Build the report file paths for the given month.
    pub fn new(config: &ReportConfig, month_name: &str) -> Self {
        let dir = Path::new(&config.output_dir);
        let prefix = &config.file_prefix;
        Self {
            csv: dir.join(format!("{}_{}.csv", prefix, month_name)),
            markdown: dir.join(format!("{}_md_{}.md", prefix, month_name)),
            powerplay: dir.join(format!("{}_pp_md_{}.md", prefix, month_name)),
        }
    }
}

/// Full English name of the current calendar month.
pub fn current_month_name() -> String {
    Local::now().format("%B").to_string()
}
