//! 行切分。
//!
//! ## 模块目的（Why）
//! - 解码前先把原始缓冲拆成逻辑行，起始行与头部解析只面对已裁剪的单行文本。
//!
//! ## 契约（What）
//! - 以字面量 `CRLF` 为分隔符；连续分隔符产生的空片段被丢弃；
//! - 每个片段裁剪首尾 ASCII 空白（空格、制表符、`\r`、`\n`、换页符），裁剪后为空的片段同样丢弃；
//! - 无失败路径：找不到分隔符时整个缓冲（裁剪后）作为唯一一行返回。
//!
//! ## 实现策略（How）
//! - [`Lines`] 为惰性迭代器，只返回输入切片的子切片，不做复制。

use core::iter::FusedIterator;

const CRLF: &[u8] = b"\r\n";

/// 将 `raw` 切分为裁剪后的非空逻辑行。
///
/// ```
/// use spark_codec_handshake::split_lines;
///
/// let lines: Vec<&[u8]> = split_lines(b"a\r\n\r\nb\r\n").collect();
/// assert_eq!(lines, [&b"a"[..], &b"b"[..]]);
/// ```
pub fn split_lines(raw: &[u8]) -> Lines<'_> {
    Lines { rest: Some(raw) }
}

/// [`split_lines`] 返回的迭代器。
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest?;
            let fragment = match find_crlf(rest) {
                Some(idx) => {
                    self.rest = Some(&rest[idx + CRLF.len()..]);
                    &rest[..idx]
                }
                None => {
                    self.rest = None;
                    rest
                }
            };
            let trimmed = fragment.trim_ascii();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
    }
}

impl FusedIterator for Lines<'_> {}

fn find_crlf(input: &[u8]) -> Option<usize> {
    input.windows(CRLF.len()).position(|window| window == CRLF)
}
