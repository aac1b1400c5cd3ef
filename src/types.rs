//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// 环境模式，决定读取哪个变量文件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum EnvMode {
    /// 生产环境 (.env)
    Prod,
    /// 开发环境 (.env.dev)
    #[default]
    Dev,
}

impl fmt::Display for EnvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvMode::Prod => write!(f, "prod"),
            EnvMode::Dev => write!(f, "dev"),
        }
    }
}

impl EnvMode {
    /// 该模式对应的变量文件名
    #[must_use]
    pub fn env_file(&self) -> &'static str {
        match self {
            EnvMode::Prod => ".env",
            EnvMode::Dev => ".env.dev",
        }
    }
}

/// 一个 master 条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub directory: String,
    pub name: String,
    pub port: u16,
}

impl Entry {
    pub fn new(directory: &str, port: u16) -> Self {
        Self {
            directory: directory.to_string(),
            name: service_name(directory),
            port,
        }
    }
}

/// 目录到服务名：只把 `/` 换成 `_`
#[must_use]
pub fn service_name(directory: &str) -> String {
    directory.replace('/', "_")
}

/// 从变量文件新引入的变量 (按键名排序)
pub type EnvVarSet = BTreeMap<String, String>;

/// 运行配置
#[derive(Debug, Clone)]
pub struct Config {
    pub verbose: bool,
    pub mode: EnvMode,
    /// 读取 env 文件与写出结果的目录
    pub work_dir: PathBuf,
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            mode: EnvMode::default(),
            work_dir: PathBuf::from("."),
            output_file: crate::compose::OUTPUT_FILE.to_string(),
        }
    }
}

impl Config {
    /// env 文件的完整路径
    #[must_use]
    pub fn env_path(&self) -> PathBuf {
        self.work_dir.join(self.mode.env_file())
    }

    /// 输出文件的完整路径
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join(&self.output_file)
    }
}
