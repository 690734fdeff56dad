//! 头部解析。
//!
//! ## 设计思路（How）
//! 1. 每个逻辑行在第一个冒号处切分为名称与值；
//! 2. 名称去掉首尾空白且不能为空；值去掉冒号后的前导空白且不能为空，内部空白原样保留；
//! 3. 任一行失败立即返回，不产生部分结果；
//! 4. 按出现顺序追加，不去重、不改写大小写。

use alloc::vec::Vec;

use crate::{
    error::{DecodeError, Malformation},
    types::Header,
};

use super::text_line;

pub(super) fn parse_headers<'a, I>(
    lines: I,
    max_headers: Option<usize>,
) -> Result<Vec<Header>, DecodeError>
where
    I: Iterator<Item = &'a [u8]>,
{
    let mut headers = Vec::new();
    // 行号 0 为起始行。
    for (line, raw) in (1..).zip(lines) {
        if let Some(limit) = max_headers
            && headers.len() >= limit
        {
            return Err(DecodeError::malformed(Malformation::TooManyHeaders {
                limit,
            }));
        }
        let text = text_line(raw, line)?;
        let header = parse_header(text)
            .ok_or(DecodeError::malformed(Malformation::InvalidHeader { line }))?;
        headers.push(header);
    }
    Ok(headers)
}

fn parse_header(line: &str) -> Option<Header> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    let value = value.trim_start();
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some(Header::new(name, value))
}
