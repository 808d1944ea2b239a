//! 报告渲染与落盘：控制台表格与日志文件共用同一份字符串，
//! 文件写入失败视为整次运行失败。

use std::path::Path;

use anyhow::{Context, Result};
use folder_sizes_domain::SizeRecord;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year][month][day]_[hour][minute][second]");

const PATH_HEADER: &str = "Folder";
const SIZE_HEADER: &str = "Size (MB)";
const SIZE_WIDTH: usize = 12;

/// 默认输出文件名 `FolderSizes_YYYYMMDD_HHMMSS.log`（本地时间，取不到时区偏移则退回 UTC）
pub fn default_output_name() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let stamp = now
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| "00000000_000000".to_string());
    format!("FolderSizes_{}.log", stamp)
}

/// 渲染两列对齐的纯文本表格：(路径, 大小 MB)，始终以 MB 为单位，不做单位换挡
pub fn render_table(records: &[SizeRecord]) -> String {
    let path_width = records
        .iter()
        .map(|r| r.path.chars().count())
        .chain(std::iter::once(PATH_HEADER.len()))
        .max()
        .unwrap_or(PATH_HEADER.len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<path_width$}  {:>SIZE_WIDTH$}\n",
        PATH_HEADER, SIZE_HEADER
    ));
    out.push_str(&format!(
        "{}  {}\n",
        "-".repeat(path_width),
        "-".repeat(SIZE_WIDTH)
    ));
    for record in records {
        out.push_str(&format!(
            "{:<path_width$}  {:>SIZE_WIDTH$.2}\n",
            record.path, record.size_mb
        ));
    }
    out
}

/// 以 UTF-8 写出报告（覆盖同名旧文件）
pub fn write_report(path: &Path, table: &str) -> Result<()> {
    std::fs::write(path, table)
        .with_context(|| format!("failed to write report file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SizeRecord> {
        vec![
            SizeRecord::new("/data/archive".to_string(), 10 * 1024 * 1024),
            SizeRecord::new("/data/b".to_string(), 5 * 1024 * 1024),
        ]
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = render_table(&records());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Folder"));
        assert!(lines[0].contains("Size (MB)"));
        assert!(lines[2].contains("/data/archive"));
        assert!(lines[2].ends_with("10.00"));
        assert!(lines[3].ends_with("5.00"));
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let table = render_table(&records());
        let widths: Vec<_> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_empty_table_still_renders_header() {
        let table = render_table(&[]);
        assert!(table.starts_with("Folder"));
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_default_output_name_shape() {
        let name = default_output_name();
        assert!(name.starts_with("FolderSizes_"));
        assert!(name.ends_with(".log"));
        // FolderSizes_ + YYYYMMDD_HHMMSS + .log
        assert_eq!(name.len(), "FolderSizes_".len() + 15 + ".log".len());
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.log");
        std::fs::write(&path, "stale content").unwrap();
        write_report(&path, "fresh table\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh table\n");
    }
}
