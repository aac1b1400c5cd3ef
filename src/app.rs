//! 应用程序容器
//!
//! 串起一次完整生成：加载变量 → 分配端口 → 拼装文档 → 写出文件

use crate::compose::{self, ComposeGenerator};
use crate::error::Result;
use crate::types::{Config, Entry, EnvVarSet};
use crate::utils::env_loader::{AmbientEnv, EnvLoader, FileStatus, LoadReport};
use crate::utils::paths;
use std::path::PathBuf;

/// 一次生成的摘要
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub entries: Vec<Entry>,
    pub env: EnvVarSet,
}

/// 应用程序
pub struct Application {
    config: Config,
    generator: ComposeGenerator,
    directories: Vec<&'static str>,
}

impl Application {
    /// 使用内置 master 列表
    pub fn new(config: Config) -> Result<Self> {
        Self::with_directories(config, compose::MASTER_DIRECTORIES)
    }

    /// 使用指定 master 列表
    pub fn with_directories(config: Config, directories: &[&'static str]) -> Result<Self> {
        Ok(Self {
            config,
            generator: ComposeGenerator::new()?,
            directories: directories.to_vec(),
        })
    }

    /// 生成文档但不写出
    pub fn render(&self, ambient: &AmbientEnv) -> Result<(String, GenerateSummary)> {
        let report = EnvLoader::load(&self.config.env_path(), ambient);
        self.log_load(&report);

        let entries = compose::allocate(
            &self.directories,
            compose::BASE_PORT,
            compose::RESERVED_PORTS,
        )?;
        if self.config.verbose {
            eprintln!("master 列表:\n{}", serde_json::to_string_pretty(&entries)?);
        }

        let document = self.generator.generate(&entries, &report.vars)?;

        let summary = GenerateSummary {
            output: self.config.output_path(),
            entries,
            env: report.vars,
        };
        Ok((document, summary))
    }

    /// 生成并写出文件
    pub fn run(&self, ambient: &AmbientEnv) -> Result<GenerateSummary> {
        let (document, summary) = self.render(ambient)?;

        paths::write_output(&summary.output, &document)?;

        if self.config.verbose {
            eprintln!(
                "✓ 已写入 {} ({} 个 master, {} 个变量)",
                summary.output.display(),
                summary.entries.len(),
                summary.env.len()
            );
        }

        Ok(summary)
    }

    fn log_load(&self, report: &LoadReport) {
        if !self.config.verbose {
            return;
        }

        eprintln!("环境: {} ({})", self.config.mode, report.path.display());
        match &report.status {
            FileStatus::Loaded => eprintln!("  读取 {} 个新变量", report.vars.len()),
            FileStatus::Missing => eprintln!("⚠️  变量文件不存在，environment 段为空"),
            FileStatus::Unreadable(reason) => {
                eprintln!("⚠️  变量文件无法读取 ({reason})，environment 段为空")
            }
        }
        for key in &report.shadowed {
            eprintln!("  跳过已存在的环境变量: {key}");
        }
        for line in &report.skipped_lines {
            eprintln!("  忽略无法解析的第 {line} 行");
        }
    }
}
