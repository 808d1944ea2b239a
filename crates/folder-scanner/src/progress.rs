//! 进度回调。仅用于人机提示，不参与结果正确性。

/// 枚举进度回调：(已接受的目录计数, 当前路径)
pub type EnumerateProgress = Box<dyn Fn(u64, &str) + Send + Sync>;

/// 求和进度回调
pub type SizeProgressCb = Box<dyn Fn(&SizeProgress) + Send + Sync>;

/// 求和阶段的进度快照
#[derive(Debug, Clone, Copy)]
pub struct SizeProgress {
    pub completed: u64,
    pub total: u64,
    /// 线性外推的预计剩余秒数，无平滑
    pub eta_secs: f64,
}

/// `elapsed / completed * (total - completed)`；completed 为 0 时返回 0
pub fn eta_seconds(elapsed_secs: f64, completed: u64, total: u64) -> f64 {
    if completed == 0 {
        return 0.0;
    }
    elapsed_secs / completed as f64 * total.saturating_sub(completed) as f64
}
