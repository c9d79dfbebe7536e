/// Filesystem layout for run artifacts
///
/// Everything lives next to the binary: logs/ for the daily log file and
/// reports/ for timestamped recommendation reports.

use chrono::Local;
use std::fs;
use std::path::PathBuf;

pub fn get_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

pub fn get_reports_dir() -> PathBuf {
    PathBuf::from("reports")
}

/// Create all required directories. Must run before logger initialization
/// (the logger needs logs/ to create its file).
pub fn ensure_all_directories() -> Result<(), String> {
    for dir in [get_logs_dir(), get_reports_dir()] {
        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
    }
    Ok(())
}

/// Daily log file, e.g. logs/tokenscout_2025-01-30.log
pub fn get_log_file_path() -> PathBuf {
    let date = Local::now().format("%Y-%m-%d");
    get_logs_dir().join(format!("tokenscout_{}.log", date))
}

/// Timestamped report file, e.g. reports/token_recommendations_2025-01-30_14-02-11.txt
pub fn get_report_file_path() -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    get_reports_dir().join(format!("token_recommendations_{}.txt", timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_shape() {
        let path = get_report_file_path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("token_recommendations_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(path.parent().unwrap(), get_reports_dir());
    }
}
