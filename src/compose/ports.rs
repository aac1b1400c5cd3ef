//! 端口分配器
//!
//! 按声明顺序为每个 master 分配 `base + index`，连续、无空洞、不复用。

use crate::error::{GenError, Result};
use crate::types::{Entry, service_name};
use std::collections::HashSet;

/// 为目录列表分配端口
///
/// # Errors
///
/// 目录非法、目录或服务名重复、端口与 `reserved` 冲突或超出 u16 时返回错误。
pub fn allocate(directories: &[&str], base: u16, reserved: &[u16]) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(directories.len());
    let mut seen_dirs = HashSet::new();
    let mut seen_names = HashSet::new();

    for (index, directory) in directories.iter().enumerate() {
        validate_directory(directory)?;

        if !seen_dirs.insert(*directory) {
            return Err(GenError::DuplicateEntry(directory.to_string()));
        }

        // "a/b" 与 "a_b" 会得到相同的服务名
        let name = service_name(directory);
        if !seen_names.insert(name.clone()) {
            return Err(GenError::DuplicateEntry(name));
        }

        let port = u16::try_from(index)
            .ok()
            .and_then(|offset| base.checked_add(offset))
            .ok_or_else(|| GenError::PortOverflow {
                directory: directory.to_string(),
                base,
                index,
            })?;

        if reserved.contains(&port) {
            return Err(GenError::PortConflict {
                port,
                directory: directory.to_string(),
            });
        }

        entries.push(Entry::new(directory, port));
    }

    Ok(entries)
}

/// 相对路径，段之间以单个 `/` 分隔
fn validate_directory(directory: &str) -> Result<()> {
    let valid = !directory.is_empty()
        && directory.split('/').all(|segment| {
            !segment.is_empty() && segment != "." && segment != ".." && !segment.contains('"')
        });

    if valid {
        Ok(())
    } else {
        Err(GenError::InvalidDirectory(directory.to_string()))
    }
}
