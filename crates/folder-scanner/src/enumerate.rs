use std::path::Path;

use folder_sizes_domain::FolderEntry;
use log::warn;

use crate::attrs::is_system_dir;
use crate::progress::EnumerateProgress;

/// 在深度预算内先序枚举 `root` 下的子目录。
///
/// `depth` 是剩余递归预算：0 直接返回空（根目录本身从不作为条目），每深入一层减一，
/// `usize::MAX` 表示不限制（由配置层的 `"0"`/`"max"` 字面量换算而来）。
/// `include_system` 为 false 时，带系统属性的目录连同其子树一起被排除；
/// 隐藏目录始终包含。列目录失败只放弃该子树并记一条 warning，兄弟子树照常继续。
pub fn enumerate_folders(
    root: &Path,
    depth: usize,
    include_system: bool,
    progress: Option<&EnumerateProgress>,
) -> Vec<FolderEntry> {
    let mut folders = Vec::new();
    let mut visited = 0u64;
    collect_folders(
        root,
        depth,
        include_system,
        &mut folders,
        &mut visited,
        progress,
    );
    folders
}

fn collect_folders(
    dir: &Path,
    budget: usize,
    include_system: bool,
    acc: &mut Vec<FolderEntry>,
    visited: &mut u64,
    progress: Option<&EnumerateProgress>,
) {
    if budget == 0 {
        return;
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("无法列出目录 {}: {}", dir.display(), e);
            return;
        }
    };

    let mut children: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    children.sort_by_key(|e| e.file_name());

    for child in children {
        let file_type = match child.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };
        // 符号链接不跟随：按链接本身的类型处理
        if !file_type.is_dir() {
            continue;
        }

        let path = child.path();
        let is_system = is_system_dir(&path);
        if is_system && !include_system {
            continue;
        }

        *visited += 1;
        let path_str = path.display().to_string();
        if let Some(cb) = progress {
            cb(*visited, &path_str);
        }

        acc.push(FolderEntry {
            path: path_str,
            is_system,
        });
        collect_folders(&path, budget - 1, include_system, acc, visited, progress);
    }
}
