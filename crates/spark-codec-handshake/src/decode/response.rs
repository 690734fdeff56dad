//! 状态行解析。
//!
//! ## 处理步骤（How）
//! 1. 在首个分隔符处切出协议段并校验 `HTTP/<major>.<minor>`；
//! 2. 取三位数字状态码，后面必须是分隔符或行尾；
//! 3. 余下文本（去掉前导分隔符）整体作为原因短语，可包含空格，也可为空。

use crate::{
    error::{DecodeError, Malformation},
    types::StatusLine,
};

use super::common::{FIELD_SEPARATORS, parse_http_version, split_field};

pub(super) fn parse_status_line(line: &str) -> Result<StatusLine, DecodeError> {
    let invalid = || DecodeError::malformed(Malformation::InvalidStatusLine);

    let (protocol, rest) = split_field(line).ok_or_else(invalid)?;
    let version = parse_http_version(protocol).ok_or_else(invalid)?;

    let (status, reason) = match rest.find(FIELD_SEPARATORS) {
        Some(idx) => (&rest[..idx], rest[idx..].trim_start_matches(FIELD_SEPARATORS)),
        None => (rest, ""),
    };
    if status.len() != 3 || !status.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    Ok(StatusLine::new(version, status, reason))
}
