//! 结构化字符串模板
//!
//! 模板内容中以 `{{field}}` 标记命名占位符。渲染时必须恰好提供
//! 模板声明的全部字段：缺字段或多余字段都会立即报错，
//! 而不是输出残缺的文档。
//!
//! # 模板语法
//!
//! ```text
//!   {{master_name}}:
//!     container_name: {{master_name}}
//!     ports:
//!       - "127.0.0.1:{{port}}:{{port}}"
//! ```

pub mod parser;
pub mod renderer;

use crate::error::Result;
use std::collections::BTreeMap;

/// 模板结构
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub name: String,
    pub content: String,
    /// 占位符字段名，按首次出现顺序
    pub fields: Vec<String>,
}

impl Template {
    /// 解析模板
    pub fn parse(name: &str, content: &str) -> Result<Self> {
        parser::parse_template(name, content)
    }

    /// 用给定字段渲染
    pub fn render(&self, values: &TemplateValues) -> Result<String> {
        renderer::render(self, values)
    }

    /// 是否包含某个字段
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// 渲染时的字段取值
#[derive(Debug, Clone, Default)]
pub struct TemplateValues {
    values: BTreeMap<String, String>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置字段值 (链式)
    #[must_use]
    pub fn with(mut self, field: &str, value: impl ToString) -> Self {
        self.values.insert(field.to_string(), value.to_string());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
