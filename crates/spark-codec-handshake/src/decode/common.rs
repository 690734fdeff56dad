//! 起始行共用的词法工具。

/// 字段分隔符：空格与水平制表符。
pub(super) const FIELD_SEPARATORS: [char; 2] = [' ', '\t'];

/// 解析 `HTTP/<major>.<minor>`，返回不含前缀的 `major.minor`。
///
/// `HTTP` 大小写无关；主次版本号均需为一个或多个 ASCII 数字。
pub(super) fn parse_http_version(text: &str) -> Option<&str> {
    let prefix = text.get(..5)?;
    if !prefix.eq_ignore_ascii_case("HTTP/") {
        return None;
    }
    let version = &text[5..];
    let (major, minor) = version.split_once('.')?;
    (is_digits(major) && is_digits(minor)).then_some(version)
}

/// 在首个分隔符处切成两段，第二段去掉前导分隔符。
pub(super) fn split_field(text: &str) -> Option<(&str, &str)> {
    let idx = text.find(FIELD_SEPARATORS)?;
    Some((&text[..idx], text[idx..].trim_start_matches(FIELD_SEPARATORS)))
}

/// RFC 9110 §5.6.2 `token`。
pub(super) fn is_token(text: &str) -> bool {
    !text.is_empty()
        && text.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
