//! 环境变量加载器 (只取文件新引入的变量)
//!
//! 启动时对进程环境做一次快照；之后从 env 文件读出的键，
//! 只有快照中不存在时才被采用。进程环境本身从不修改。

use crate::config::format::dotenv::DotenvParser;
use crate::types::EnvVarSet;
use crate::utils::paths;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 启动时已存在的环境变量名
#[derive(Debug, Clone, Default)]
pub struct AmbientEnv {
    keys: HashSet<OsString>,
}

impl AmbientEnv {
    /// 对当前进程环境做快照
    pub fn capture() -> Self {
        Self {
            keys: std::env::vars_os().map(|(key, _)| key).collect(),
        }
    }

    /// 由给定键名构造 (测试和嵌入使用)
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<OsString>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(std::ffi::OsStr::new(key))
    }
}

/// 文件读取状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Loaded,
    Missing,
    /// 存在但无法读取，附带原因
    Unreadable(String),
}

/// 一次加载的结果
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub vars: EnvVarSet,
    /// 因已存在于环境中而被排除的键
    pub shadowed: Vec<String>,
    /// 无法解析的行号
    pub skipped_lines: Vec<usize>,
}

/// 环境变量加载器
pub struct EnvLoader;

impl EnvLoader {
    /// 从 env 文件加载新变量
    ///
    /// 文件缺失或无法读取时返回空集合，不回退到其他文件。
    pub fn load(path: &Path, ambient: &AmbientEnv) -> LoadReport {
        let mut report = LoadReport {
            path: path.to_path_buf(),
            status: FileStatus::Loaded,
            vars: EnvVarSet::new(),
            shadowed: Vec::new(),
            skipped_lines: Vec::new(),
        };

        if !paths::file_exists(path) {
            report.status = FileStatus::Missing;
            return report;
        }

        let content = match paths::read_file(path) {
            Ok(content) => content,
            Err(e) => {
                report.status = FileStatus::Unreadable(e.to_string());
                return report;
            }
        };

        let parsed = DotenvParser::parse(&content);
        report.skipped_lines = parsed.skipped;

        for (key, value) in parsed.vars {
            if ambient.contains(&key) {
                if !report.shadowed.contains(&key) {
                    report.shadowed.push(key);
                }
                continue;
            }
            // 同名键后者覆盖前者
            report.vars.insert(key, value);
        }

        report
    }
}
