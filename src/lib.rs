//! compose-gen - docker-compose.yaml 生成工具
//!
//! 读取 env 文件中新引入的变量，为每个 master 生成一段服务定义，
//! 连同固定服务和网络定义一起写出。

// CLI 定义
pub mod cli;

// 错误类型
pub mod error;

// 核心数据结构
pub mod types;

// .env 解析
pub mod config;

// 结构化模板
pub mod template;

// 端口分配与文档生成
pub mod compose;

// 文件与环境工具
pub mod utils;

// 应用程序容器
pub mod app;

#[cfg(test)]
pub mod test_utils;

// 重新导出常用类型
pub use error::{GenError, Result};
pub use types::{Config, Entry, EnvMode, EnvVarSet};
