//! 路径与文件读写工具 (传统原则：常识性接口设计)

use crate::error::{GenError, Result};
use std::path::Path;

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 读取文件内容
pub fn read_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// 写出生成结果，无条件覆盖已有内容 (临时文件 + 原子替换)
///
/// # Errors
///
/// 任何写入失败都以 [`GenError::OutputWrite`] 返回，附带目标路径。
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let wrap = |source: std::io::Error| GenError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    // 临时文件放在同一目录，保证 rename 不跨文件系统
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, content).map_err(wrap)?;

    if let Err(err) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(wrap(err));
    }

    Ok(())
}
