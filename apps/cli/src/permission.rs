/// 检测当前进程是否以管理员权限运行（Windows；其余平台视为已具备权限）
pub fn is_elevated_process() -> bool {
    #[cfg(windows)]
    {
        is_elevated::is_elevated()
    }

    #[cfg(not(windows))]
    {
        true
    }
}
