use serde::{Deserialize, Serialize};

/// 枚举阶段发现的一个目录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderEntry {
    pub path: String,
    /// 平台文件属性中的系统标记（非 Windows 平台恒为 false）
    pub is_system: bool,
}
