//! 解码模块入口。
//!
//! ## 模块目标（Why）
//! - 把完整的 header 块字节转换为 [`Message`]，是本 crate 唯一做格式敏感文本解析的地方。
//!
//! ## 关键流程（How）
//! 1. 调用 [`split_lines`] 切分逻辑行，首行为起始行，其余为头部行；没有任何行视为起始行缺失；
//! 2. 按报文种类委托 `request` / `response` 解析起始行；
//! 3. 委托 `headers` 逐行解析头部，任一行失败即整体失败；
//! 4. 全部成功才构造 `Message`。
//!
//! ## 契约（What）
//! - 失败统一返回 [`DecodeError::MalformedMessage`]，内部诊断会以 `debug` 级别写入 `tracing`；
//! - 头部保持线上顺序。

mod common;
mod headers;
mod request;
mod response;

use core::str;

use tracing::{debug, trace};

use crate::{
    error::{DecodeError, Malformation},
    options::DecodeOptions,
    split::split_lines,
    types::{Message, MessageKind, StartLine},
};

/// 使用默认选项解码。
pub fn decode(raw: &[u8], kind: MessageKind) -> Result<Message, DecodeError> {
    decode_with(raw, kind, &DecodeOptions::default())
}

/// 按请求语法解码，等价于 `decode(raw, MessageKind::Request)`。
pub fn decode_request(raw: &[u8]) -> Result<Message, DecodeError> {
    decode(raw, MessageKind::Request)
}

/// 按响应语法解码，等价于 `decode(raw, MessageKind::Response)`。
pub fn decode_response(raw: &[u8]) -> Result<Message, DecodeError> {
    decode(raw, MessageKind::Response)
}

/// 按给定选项解码。
///
/// # 教案式说明
/// - **意图 (Why)**：允许握手层选择请求行语法与头部预算；
/// - **契约 (What)**：
///   - **输入**：`raw` 为完整 header 块，行以 `CRLF` 分隔；`kind` 决定起始行语法；
///   - **返回**：成功时为拥有型 [`Message`]，不再借用 `raw`；失败时为单一错误种类；
///   - **后置条件**：无部分成功结果。
pub fn decode_with(
    raw: &[u8],
    kind: MessageKind,
    options: &DecodeOptions,
) -> Result<Message, DecodeError> {
    let result = decode_lines(raw, kind, options);
    match &result {
        Ok(message) => trace!(
            %kind,
            headers = message.headers().len(),
            "decoded handshake message"
        ),
        Err(err) => debug!(
            %kind,
            diagnostic = %err.diagnostic(),
            "rejected malformed handshake message"
        ),
    }
    result
}

fn decode_lines(
    raw: &[u8],
    kind: MessageKind,
    options: &DecodeOptions,
) -> Result<Message, DecodeError> {
    let mut lines = split_lines(raw);
    let first = lines
        .next()
        .ok_or(DecodeError::malformed(Malformation::MissingStartLine))?;
    let first = text_line(first, 0)?;

    let start_line = match kind {
        MessageKind::Request => {
            StartLine::Request(request::parse_request_line(first, options.request_grammar)?)
        }
        MessageKind::Response => StartLine::Response(response::parse_status_line(first)?),
    };
    let headers = headers::parse_headers(lines, options.max_headers)?;
    Ok(Message::new(start_line, headers))
}

/// 将逻辑行视作 UTF-8 文本；`line` 为切分后的行号，用于诊断。
fn text_line(raw: &[u8], line: usize) -> Result<&str, DecodeError> {
    str::from_utf8(raw).map_err(|_| DecodeError::malformed(Malformation::NonUtf8 { line }))
}
