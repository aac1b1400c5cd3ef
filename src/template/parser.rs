//! 模板解析器
//!
//! 解析模板语法：{{field}}

use crate::error::{GenError, Result};
use crate::template::Template;
use regex::Regex;
use std::sync::LazyLock;

/// 匹配 {{...}}，内部内容在解析时再校验
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("占位符正则无效"));

/// 解析模板内容
pub fn parse_template(name: &str, content: &str) -> Result<Template> {
    let mut fields: Vec<String> = Vec::new();

    for cap in PLACEHOLDER.captures_iter(content) {
        let full_match = &cap[0];
        let field = cap[1].trim();

        if !is_valid_field(field) {
            return Err(GenError::InvalidPlaceholder {
                template: name.to_string(),
                placeholder: full_match.to_string(),
            });
        }

        // 同一字段可出现多次，只记录一次
        if !fields.iter().any(|f| f == field) {
            fields.push(field.to_string());
        }
    }

    Ok(Template {
        name: name.to_string(),
        content: content.to_string(),
        fields,
    })
}

fn is_valid_field(field: &str) -> bool {
    let mut chars = field.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_field() {
        let template = parse_template("test", "container_name: {{master_name}}").unwrap();

        assert_eq!(template.name, "test");
        assert_eq!(template.fields, vec!["master_name"]);
    }

    #[test]
    fn test_parse_repeated_field_once() {
        let template = parse_template("test", r#""127.0.0.1:{{port}}:{{port}}""#).unwrap();
        assert_eq!(template.fields, vec!["port"]);
    }

    #[test]
    fn test_parse_keeps_first_seen_order() {
        let content = "{{master_name}}\n{{environment}}\n{{master_directory}}\n{{port}}";
        let template = parse_template("test", content).unwrap();
        assert_eq!(
            template.fields,
            vec!["master_name", "environment", "master_directory", "port"]
        );
    }

    #[test]
    fn test_parse_whitespace_handling() {
        let template = parse_template("test", "{{ port }}").unwrap();
        assert_eq!(template.fields, vec!["port"]);
    }

    #[test]
    fn test_parse_no_fields() {
        let template = parse_template("trailer", "networks:\n  net_front:\n").unwrap();
        assert!(template.fields.is_empty());
    }

    #[test]
    fn test_parse_invalid_placeholder() {
        assert!(parse_template("test", "{{}}").is_err());
        assert!(parse_template("test", "{{   }}").is_err());
        assert!(parse_template("test", "{{master-name}}").is_err());
        assert!(parse_template("test", "{{port|8011}}").is_err());
    }

    #[test]
    fn test_single_braces_are_literal() {
        let template = parse_template("test", "test: ['CMD', {x}]").unwrap();
        assert!(template.fields.is_empty());
    }
}
