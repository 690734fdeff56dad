//! 文本序列化。
//!
//! ## 模块目标（Why）
//! - 为日志、测试回放或直接写入 `String` 的调用方提供基于 [`core::fmt::Write`] 的输出；
//! - 与 [`crate::encode`] 共享同一组“行片段”定义，保证两条输出路径字节一致。
//!
//! ## 使用方式（What & How）
//! - [`write_message`] 输出完整报文（含结尾空行）；
//! - [`write_start_line`] / [`write_header`] 可按需组合；
//! - `Message` 的 `Display` 实现即 `write_message`。

use core::fmt;

use crate::types::{Header, Message, StartLine};

pub(crate) const CRLF: &str = "\r\n";

/// 起始行的组成片段（含行尾 `CRLF`）。
pub(crate) fn start_line_pieces(line: &StartLine) -> [&str; 7] {
    match line {
        StartLine::Request(line) => [
            line.method.as_str(),
            " ",
            line.resource.as_str(),
            " ",
            "HTTP/",
            line.version.as_str(),
            CRLF,
        ],
        StartLine::Response(line) => [
            "HTTP/",
            line.version.as_str(),
            " ",
            line.status.as_str(),
            " ",
            line.reason.as_str(),
            CRLF,
        ],
    }
}

/// 头部行的组成片段（含行尾 `CRLF`）。
pub(crate) fn header_pieces(header: &Header) -> [&str; 4] {
    [header.name.as_str(), ": ", header.value.as_str(), CRLF]
}

/// 写出起始行（含 `CRLF`）。
pub fn write_start_line<W: fmt::Write>(writer: &mut W, line: &StartLine) -> fmt::Result {
    for piece in start_line_pieces(line) {
        writer.write_str(piece)?;
    }
    Ok(())
}

/// 写出单个头部行（含 `CRLF`）。
pub fn write_header<W: fmt::Write>(writer: &mut W, header: &Header) -> fmt::Result {
    for piece in header_pieces(header) {
        writer.write_str(piece)?;
    }
    Ok(())
}

/// 写出完整报文：起始行、各头部行以及结尾空行。
pub fn write_message<W: fmt::Write>(writer: &mut W, message: &Message) -> fmt::Result {
    write_start_line(writer, message.start_line())?;
    for header in message.headers() {
        write_header(writer, header)?;
    }
    writer.write_str(CRLF)
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_message(f, self)
    }
}
