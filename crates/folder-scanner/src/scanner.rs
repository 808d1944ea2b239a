use std::time::Instant;

use folder_sizes_common::{FolderSizesError, ScanConfig};
use folder_sizes_domain::SizeReport;

use crate::aggregate::{aggregate_sizes, sort_records};
use crate::enumerate::enumerate_folders;
use crate::progress::{EnumerateProgress, SizeProgressCb};

/// 执行一次完整扫描：枚举 -> 逐目录求和 -> 降序排序。
///
/// 返回完整的排序结果；Top-K 截取由报告层决定。根路径在这里再校验一次
/// （命令行层已先行校验存在性），不存在或无法解析时返回 InvalidPath。
pub fn scan_folder_sizes(
    config: &ScanConfig,
    enum_progress: Option<&EnumerateProgress>,
    size_progress: Option<&SizeProgressCb>,
) -> Result<SizeReport, FolderSizesError> {
    let start = Instant::now();

    if !config.root.exists() {
        return Err(FolderSizesError::InvalidPath(format!(
            "路径不存在: {}",
            config.root.display()
        )));
    }
    let root = std::fs::canonicalize(&config.root)
        .map_err(|e| FolderSizesError::InvalidPath(format!("无法解析路径: {}", e)))?;

    let folders = enumerate_folders(
        &root,
        config.depth.budget(),
        config.include_system,
        enum_progress,
    );
    let folder_count = folders.len() as u64;

    let (mut records, skipped) = aggregate_sizes(&folders, size_progress);
    sort_records(&mut records);

    Ok(SizeReport {
        records,
        folder_count,
        skipped,
        scan_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folder_sizes_common::MaxDepth;
    use std::path::{Path, PathBuf};

    fn config(root: PathBuf, depth: MaxDepth) -> ScanConfig {
        ScanConfig {
            root,
            first: 10,
            output: PathBuf::from("unused.log"),
            depth,
            include_system: false,
        }
    }

    #[test]
    fn test_scan_invalid_root() {
        let cfg = config(
            PathBuf::from("/nonexistent_xyz_12345_folder"),
            MaxDepth::Levels(2),
        );
        let err = scan_folder_sizes(&cfg, None, None).unwrap_err();
        assert!(matches!(err, FolderSizesError::InvalidPath(_)));
    }

    #[test]
    fn test_scan_counts_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("big")).unwrap();
        std::fs::create_dir(dir.path().join("small")).unwrap();
        std::fs::write(dir.path().join("big").join("x.bin"), vec![0u8; 4096]).unwrap();
        std::fs::write(dir.path().join("small").join("y.bin"), vec![0u8; 16]).unwrap();

        let cfg = config(dir.path().to_path_buf(), MaxDepth::Levels(1));
        let report = scan_folder_sizes(&cfg, None, None).unwrap();
        assert_eq!(report.folder_count, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.records.len(), 2);
        assert!(Path::new(&report.records[0].path).ends_with("big"));
        assert_eq!(report.records[0].size_bytes, 4096);
    }
}
