use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// 一个目录的累计大小。`size_mb` 在构造时一次性算出（四舍五入到两位小数），
/// 之后不再变动。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeRecord {
    pub path: String,
    pub size_bytes: u64,
    pub size_mb: f64,
}

impl SizeRecord {
    pub fn new(path: String, size_bytes: u64) -> Self {
        let size_mb = (size_bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0;
        Self {
            path,
            size_bytes,
            size_mb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_mebibytes() {
        let r = SizeRecord::new("/a".to_string(), 10 * 1024 * 1024);
        assert_eq!(r.size_mb, 10.00);
        let r = SizeRecord::new("/b".to_string(), 5 * 1024 * 1024);
        assert_eq!(r.size_mb, 5.00);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 1_054_867 字节 ≈ 1.0060 MB -> 1.01
        let r = SizeRecord::new("/c".to_string(), 1_054_867);
        assert_eq!(r.size_mb, 1.01);
        // 半个 MB
        let r = SizeRecord::new("/d".to_string(), 512 * 1024);
        assert_eq!(r.size_mb, 0.5);
    }

    #[test]
    fn test_zero_bytes() {
        let r = SizeRecord::new("/e".to_string(), 0);
        assert_eq!(r.size_bytes, 0);
        assert_eq!(r.size_mb, 0.0);
    }
}
