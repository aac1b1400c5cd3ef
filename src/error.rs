//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("写入输出文件 {} 失败", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("模板 '{template}' 缺少字段: {field}")]
    MissingField { template: String, field: String },

    #[error("模板 '{template}' 不包含字段: {field}")]
    UnknownField { template: String, field: String },

    #[error("模板 '{template}' 中的占位符无效: {placeholder}")]
    InvalidPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("端口 {port} 已被固定服务占用 ({directory})")]
    PortConflict { port: u16, directory: String },

    #[error("端口超出范围: {directory} (起始 {base} + 序号 {index})")]
    PortOverflow {
        directory: String,
        base: u16,
        index: usize,
    },

    #[error("重复的 master: {0}")]
    DuplicateEntry(String),

    #[error("无效的 master 目录: '{0}'")]
    InvalidDirectory(String),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// 详细的错误报告函数 (透明原则)
impl GenError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            let mut current = self.source();
            let mut first = true;
            while let Some(cause) = current {
                if first {
                    eprintln!("  └─ 原因: {}", cause);
                    first = false;
                } else {
                    eprintln!("     └─ {}", cause);
                }
                current = cause.source();
            }
        } else {
            match self {
                GenError::OutputWrite { path, source } => {
                    eprintln!("写入失败: {}: {}", path.display(), source)
                }
                GenError::Io(err) => eprintln!("文件错误: {}", err),
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, GenError>;
