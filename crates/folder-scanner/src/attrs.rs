//! 平台文件属性探测：Windows 下读取 FILE_ATTRIBUTE_SYSTEM 判断系统目录，
//! 其余平台没有对应概念，恒为 false。隐藏目录不在此判断（隐藏不参与过滤）。

use std::path::Path;

#[cfg(windows)]
pub fn is_system_dir(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;
    use windows_sys::Win32::Storage::FileSystem::FILE_ATTRIBUTE_SYSTEM;

    match std::fs::symlink_metadata(path) {
        Ok(meta) => meta.file_attributes() & FILE_ATTRIBUTE_SYSTEM != 0,
        Err(_) => false,
    }
}

#[cfg(not(windows))]
pub fn is_system_dir(_path: &Path) -> bool {
    false
}
