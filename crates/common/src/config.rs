use std::path::PathBuf;
use std::str::FromStr;

use crate::FolderSizesError;

/// 一次扫描的运行配置，由命令行层解析后传入核心
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 扫描根目录
    pub root: PathBuf,
    /// 报告中列出的文件夹数量（Top-K）
    pub first: usize,
    /// 报告输出文件路径
    pub output: PathBuf,
    /// 子目录递归深度
    pub depth: MaxDepth,
    /// 是否包含系统文件夹
    pub include_system: bool,
}

/// 用户侧的深度字面量：`"0"` 与 `"max"` 表示不限制，其余非负整数表示层数。
///
/// 注意这里是用户输入域；递归时的「剩余深度预算」是另一个域，
/// 预算为 0 表示停止，两者不共用表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxDepth {
    Unbounded,
    Levels(usize),
}

impl MaxDepth {
    /// 换算为递归时的剩余深度预算
    pub fn budget(self) -> usize {
        match self {
            MaxDepth::Unbounded => usize::MAX,
            MaxDepth::Levels(n) => n,
        }
    }
}

impl FromStr for MaxDepth {
    type Err = FolderSizesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("max") || s == "0" {
            return Ok(MaxDepth::Unbounded);
        }
        match s.parse::<usize>() {
            Ok(n) => Ok(MaxDepth::Levels(n)),
            Err(_) => Err(FolderSizesError::Config(format!(
                "深度必须是非负整数、\"0\" 或 \"max\"，收到: {:?}",
                s
            ))),
        }
    }
}
