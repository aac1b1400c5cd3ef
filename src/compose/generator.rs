//! 文档生成器
//!
//! 头注释 + 固定服务 + 每个 master 一段 + 网络定义，按顺序拼接。

use crate::compose::{WEB_PORT, templates};
use crate::error::Result;
use crate::template::{Template, TemplateValues};
use crate::types::{Entry, EnvVarSet};

/// 渲染 environment 段
///
/// 只列出变量名，值由部署时的环境提供。没有变量时返回空字符串。
#[must_use]
pub fn render_environment_block(env: &EnvVarSet) -> String {
    if env.is_empty() {
        return String::new();
    }

    let mut block = String::from("    environment:\n");
    for key in env.keys() {
        block.push_str("      - ");
        block.push_str(key);
        block.push('\n');
    }
    block
}

/// compose 文档生成器
pub struct ComposeGenerator {
    header: String,
    preamble: Template,
    master: Template,
    trailer: Template,
}

impl ComposeGenerator {
    /// 使用内置模板
    pub fn new() -> Result<Self> {
        Self::with_templates(
            templates::HEADER,
            templates::PREAMBLE,
            templates::MASTER_SERVICE,
            templates::TRAILER,
        )
    }

    /// 使用自定义模板
    pub fn with_templates(
        header: &str,
        preamble: &str,
        master: &str,
        trailer: &str,
    ) -> Result<Self> {
        Ok(Self {
            header: header.to_string(),
            preamble: Template::parse("preamble", preamble)?,
            master: Template::parse("master", master)?,
            trailer: Template::parse("trailer", trailer)?,
        })
    }

    /// 生成完整文档
    pub fn generate(&self, entries: &[Entry], env: &EnvVarSet) -> Result<String> {
        let environment = render_environment_block(env);
        let mut document = self.header.clone();

        let preamble = TemplateValues::new()
            .with("environment", &environment)
            .with("web_port", WEB_PORT);
        document.push_str(&self.preamble.render(&preamble)?);

        for entry in entries {
            document.push_str(&self.render_entry(entry, &environment)?);
        }

        document.push_str(&self.trailer.render(&TemplateValues::new())?);
        Ok(document)
    }

    /// 渲染单个 master 段
    pub fn render_entry(&self, entry: &Entry, environment: &str) -> Result<String> {
        let values = TemplateValues::new()
            .with("master_name", &entry.name)
            .with("master_directory", &entry.directory)
            .with("port", entry.port)
            .with("environment", environment);
        self.master.render(&values)
    }
}
