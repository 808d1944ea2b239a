use serde::{Deserialize, Serialize};

use crate::SizeRecord;

/// 一次完整扫描的结果：按大小降序排好的记录与各项指标
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeReport {
    pub records: Vec<SizeRecord>,
    /// 枚举到的目录总数
    pub folder_count: u64,
    /// 因顶层读取失败而被跳过（未产生记录）的目录数
    pub skipped: u64,
    pub scan_time_ms: u64,
}

impl SizeReport {
    /// 取前 `first` 条记录（不足时全部返回）
    pub fn top(&self, first: usize) -> &[SizeRecord] {
        &self.records[..first.min(self.records.len())]
    }
}
