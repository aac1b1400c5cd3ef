//! .env 格式解析器 (简单原则：透明的文本解析)

/// 解析结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotenvFile {
    /// 按出现顺序排列的 (键, 值)
    pub vars: Vec<(String, String)>,
    /// 被跳过的行号 (从 1 开始，取条目起始行)
    pub skipped: Vec<usize>,
}

/// .env 格式解析器
///
/// # 示例
/// ```ignore
/// # Buildbot
/// BUILDMASTER_DB_HOST=mariadb
/// export MQ_ROUTER_URL=ws://crossbar:8080/ws
/// BUILDMASTER_URL="https://buildbot.example.org/"
/// GITHUB_TOKEN='abc#123'
/// TLS_CERT="-----BEGIN CERTIFICATE-----
/// MIIB...
/// -----END CERTIFICATE-----"
/// ```
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 忽略空行和以 # 开头的注释行
    /// - 格式：KEY=VALUE，可带 `export ` 前缀
    /// - 键为不含 `=`、`#`、空白的任意字符，或单引号包裹的 `'KEY'`
    /// - 引号值可以跨行；单引号只识别 `\\` `\'`，
    ///   双引号另外识别 `\"` `\n` `\t` `\r` `\a` `\b` `\f` `\v`
    /// - 无引号值中空白后的 `#` 起为行内注释
    /// - 只有键没有 `=` 的行不产生变量，与无法解析的行一起记录行号
    #[must_use]
    pub fn parse(content: &str) -> DotenvFile {
        let mut file = DotenvFile::default();
        let mut reader = Reader::new(content);

        loop {
            reader.skip_whitespace();
            if reader.at_end() {
                break;
            }

            let line = reader.line;

            // 注释
            if reader.rest().starts_with('#') {
                reader.skip_line();
                continue;
            }

            match parse_binding(&mut reader) {
                Some((key, Some(value))) => file.vars.push((key, value)),
                Some((_, None)) => file.skipped.push(line),
                None => {
                    file.skipped.push(line);
                    reader.skip_line();
                }
            }
        }

        file
    }
}

impl Default for DotenvParser {
    fn default() -> Self {
        Self
    }
}

/// 按字节位置前进的读取器，同时记录当前行号
struct Reader<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Reader<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn advance(&mut self, len: usize) -> &'a str {
        let taken = &self.src[self.pos..self.pos + len];
        self.line += taken.matches('\n').count();
        self.pos += len;
        taken
    }

    fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.advance(prefix.len());
            true
        } else {
            false
        }
    }

    /// 跳过空白，包括换行
    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.advance(rest.len() - rest.trim_start().len());
    }

    /// 跳过行内空白
    fn skip_inline_whitespace(&mut self) {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !c.is_whitespace() || c == '\n' || c == '\r')
            .unwrap_or(rest.len());
        self.advance(len);
    }

    fn take_until_eol(&mut self) -> &'a str {
        let rest = self.rest();
        self.advance(rest.find(['\r', '\n']).unwrap_or(rest.len()))
    }

    /// 行尾：可选空白后接换行或文件结束
    fn end_of_line(&mut self) -> bool {
        self.skip_inline_whitespace();
        self.eat("\r\n") || self.eat("\n") || self.eat("\r") || self.at_end()
    }

    fn skip_line(&mut self) {
        self.take_until_eol();
        self.end_of_line();
    }
}

/// 解析一个条目；没有 `=` 时值为 None，格式错误返回 None
fn parse_binding(reader: &mut Reader<'_>) -> Option<(String, Option<String>)> {
    if let Some(after) = reader.rest().strip_prefix("export")
        && after.starts_with([' ', '\t'])
    {
        reader.advance("export".len());
        reader.skip_inline_whitespace();
    }

    let key = parse_key(reader)?;
    reader.skip_inline_whitespace();

    let value = if reader.eat("=") {
        reader.skip_inline_whitespace();
        Some(parse_value(reader)?)
    } else {
        None
    };

    // 引号值之后的注释
    reader.skip_inline_whitespace();
    if reader.rest().starts_with('#') {
        reader.take_until_eol();
    }

    reader.end_of_line().then_some((key, value))
}

fn parse_key(reader: &mut Reader<'_>) -> Option<String> {
    let rest = reader.rest();

    if let Some(quoted) = rest.strip_prefix('\'') {
        let end = quoted.find('\'').filter(|&end| end > 0)?;
        let key = quoted[..end].to_string();
        reader.advance(end + 2);
        return Some(key);
    }

    let len = rest
        .find(|c: char| c == '=' || c == '#' || c.is_whitespace())
        .unwrap_or(rest.len());
    (len > 0).then(|| reader.advance(len).to_string())
}

/// 解析值部分，引号未闭合时返回 None
fn parse_value(reader: &mut Reader<'_>) -> Option<String> {
    let rest = reader.rest();

    match rest.chars().next() {
        Some(quote @ ('\'' | '"')) => {
            let raw = scan_quoted(&rest[1..], quote)?;
            reader.advance(raw.len() + 2);
            let escapes = if quote == '"' { "\\'\"abfnrtv" } else { "\\'" };
            Some(decode_escapes(raw, escapes))
        }
        _ => Some(strip_inline_comment(reader.take_until_eol())),
    }
}

/// 找到闭合引号，返回引号内的原始内容；`\` 加引号不算闭合
fn scan_quoted(body: &str, quote: char) -> Option<&str> {
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            if body[i + 1..].starts_with(quote) {
                chars.next();
            }
        } else if c == quote {
            return Some(&body[..i]);
        }
    }
    None
}

fn decode_escapes(raw: &str, escapes: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && escapes.contains(next)
        {
            chars.next();
            out.push(match next {
                'a' => '\x07',
                'b' => '\x08',
                'f' => '\x0c',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                'v' => '\x0b',
                other => other,
            });
            continue;
        }
        out.push(c);
    }

    out
}

/// 去掉空白后的 `#` 注释和行尾空白
fn strip_inline_comment(raw: &str) -> String {
    let cut = raw
        .char_indices()
        .find(|&(i, c)| c == '#' && raw[..i].ends_with(char::is_whitespace))
        .map_or(raw.len(), |(i, _)| i);
    raw[..cut].trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(file: &DotenvFile) -> Vec<&str> {
        file.vars.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let content = r"
# 注释会被忽略
KEY1=value1
KEY2=value2
        ";

        let result = DotenvParser::parse(content);
        assert_eq!(result.vars.len(), 2);
        assert_eq!(result.vars[0], ("KEY1".to_string(), "value1".to_string()));
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_parse_empty_value() {
        let result = DotenvParser::parse("KEY=\nKEY2=value");
        assert_eq!(result.vars[0].1, "");
        assert_eq!(result.vars[1].1, "value");
    }

    #[test]
    fn test_parse_export_and_spaces() {
        let result = DotenvParser::parse("export FOO = bar baz \n  export   BAZ=qux");
        assert_eq!(result.vars[0], ("FOO".to_string(), "bar baz".to_string()));
        assert_eq!(result.vars[1], ("BAZ".to_string(), "qux".to_string()));
    }

    #[test]
    fn test_parse_quotes() {
        let content = "A='x # y'\nB=\"line\\nnext\"\nC=\"say \\\"hi\\\"\"\nD='it\\'s \\n'";
        let result = DotenvParser::parse(content);
        assert_eq!(result.vars[0].1, "x # y");
        assert_eq!(result.vars[1].1, "line\nnext");
        assert_eq!(result.vars[2].1, "say \"hi\"");
        assert_eq!(result.vars[3].1, "it's \\n");
    }

    #[test]
    fn test_parse_inline_comment() {
        let result = DotenvParser::parse("PORT=8080 # web\nURL=http://a/#frag\nQ=\"v\" # note");
        assert_eq!(result.vars[0].1, "8080");
        assert_eq!(result.vars[1].1, "http://a/#frag");
        assert_eq!(result.vars[2].1, "v");
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_parse_multiline_quoted_value() {
        let content = "CERT=\"-----BEGIN\nINNER=x\n-----END\"\nAFTER=1\n";
        let result = DotenvParser::parse(content);

        assert_eq!(keys(&result), vec!["CERT", "AFTER"]);
        assert_eq!(result.vars[0].1, "-----BEGIN\nINNER=x\n-----END");
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_parse_multiline_single_quoted_keeps_line_numbers() {
        let content = "A='one\ntwo'\nbroken line\nB=2\n";
        let result = DotenvParser::parse(content);

        assert_eq!(keys(&result), vec!["A", "B"]);
        assert_eq!(result.vars[0].1, "one\ntwo");
        assert_eq!(result.skipped, vec![3]);
    }

    #[test]
    fn test_parse_key_rules() {
        let result = DotenvParser::parse("1KEY=x\n'QUOTED KEY'=y\nweird.key-1=z\n");
        assert_eq!(keys(&result), vec!["1KEY", "QUOTED KEY", "weird.key-1"]);
    }

    #[test]
    fn test_parse_skips_invalid_lines() {
        let content = "GOOD=1\nNOEQUALS\n=novalue\nA=\"x\" trailing\nOPEN=\"unterminated\nLAST=2";
        let result = DotenvParser::parse(content);

        assert_eq!(keys(&result), vec!["GOOD", "LAST"]);
        assert_eq!(result.skipped, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_crlf() {
        let result = DotenvParser::parse("A=1\r\nB=\"2\"\r\n");
        assert_eq!(result.vars[0].1, "1");
        assert_eq!(result.vars[1].1, "2");
        assert!(result.skipped.is_empty());
    }
}
