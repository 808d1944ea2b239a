use std::path::Path;
use std::time::Instant;

use folder_sizes_common::FolderSizesError;
use folder_sizes_domain::{FolderEntry, SizeRecord};
use log::warn;

use crate::progress::{eta_seconds, SizeProgress, SizeProgressCb};

/// 递归累加 `dir` 下所有文件的字节数，穿过隐藏与系统目录（统计阶段不做过滤）。
///
/// 顶层目录本身列不出来时返回错误；更深层的任何读取失败按零贡献静默忽略。
pub fn folder_size(dir: &Path) -> Result<u64, FolderSizesError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            FolderSizesError::PermissionDenied(dir.display().to_string())
        } else {
            FolderSizesError::Io(e)
        }
    })?;
    Ok(sum_entries(entries))
}

/// 顶层以下的尽力求和：列不出来的目录贡献 0
fn sum_tree(dir: &Path) -> u64 {
    match std::fs::read_dir(dir) {
        Ok(entries) => sum_entries(entries),
        Err(_) => 0,
    }
}

fn sum_entries(entries: std::fs::ReadDir) -> u64 {
    let mut total = 0u64;
    for entry in entries.filter_map(|e| e.ok()) {
        let meta = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };
        if meta.is_dir() {
            total += sum_tree(&entry.path());
        } else {
            total += meta.len();
        }
    }
    total
}

/// 逐个统计枚举到的目录，返回 (记录, 被跳过的目录数)。
///
/// 某个目录顶层统计失败时记一条 warning 并跳过，不生成零值占位记录。
/// 每处理完一个目录回调一次进度（含线性外推的 ETA）。
pub fn aggregate_sizes(
    entries: &[FolderEntry],
    progress: Option<&SizeProgressCb>,
) -> (Vec<SizeRecord>, u64) {
    let total = entries.len() as u64;
    let start = Instant::now();
    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = 0u64;

    for (idx, entry) in entries.iter().enumerate() {
        match folder_size(Path::new(&entry.path)) {
            Ok(bytes) => records.push(SizeRecord::new(entry.path.clone(), bytes)),
            Err(e) => {
                warn!("跳过无法统计的目录 {}: {}", entry.path, e);
                skipped += 1;
            }
        }

        if let Some(cb) = progress {
            let completed = (idx + 1) as u64;
            cb(&SizeProgress {
                completed,
                total,
                eta_secs: eta_seconds(start.elapsed().as_secs_f64(), completed, total),
            });
        }
    }

    (records, skipped)
}

/// 按字节数降序；相同大小按路径升序（文档化的次级键，保证输出稳定）
pub fn sort_records(records: &mut [SizeRecord]) {
    records.sort_by(|a, b| {
        b.size_bytes
            .cmp(&a.size_bytes)
            .then_with(|| a.path.cmp(&b.path))
    });
}

/// 排序后取前 `first` 条
pub fn top_records(mut records: Vec<SizeRecord>, first: usize) -> Vec<SizeRecord> {
    sort_records(&mut records);
    records.truncate(first);
    records
}
