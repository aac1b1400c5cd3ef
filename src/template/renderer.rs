//! 模板渲染器

use crate::error::{GenError, Result};
use crate::template::parser::PLACEHOLDER;
use crate::template::{Template, TemplateValues};
use regex::Captures;

/// 渲染模板
///
/// 先校验字段集合与模板一致，再一次性替换所有占位符；
/// 替换进去的值不会被再次扫描。
pub fn render(template: &Template, values: &TemplateValues) -> Result<String> {
    // 1. 缺失字段
    if let Some(field) = template.fields.iter().find(|f| values.get(f).is_none()) {
        return Err(GenError::MissingField {
            template: template.name.clone(),
            field: field.clone(),
        });
    }

    // 2. 多余字段
    if let Some(field) = values.fields().find(|f| !template.has_field(f)) {
        return Err(GenError::UnknownField {
            template: template.name.clone(),
            field: field.to_string(),
        });
    }

    // 3. 替换
    let rendered = PLACEHOLDER.replace_all(&template.content, |caps: &Captures| {
        values.get(caps[1].trim()).unwrap_or_default().to_string()
    });

    Ok(rendered.into_owned())
}
