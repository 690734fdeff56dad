//! 编码模块。
//!
//! ## 模块目的（Why）
//! - 将 [`Message`] 还原为线上字节，交给传输层写出；
//! - 以“每行一个片段”的形式返回，调用方可逐片写入（例如 vectored write），无需先拼接整块缓冲。
//!
//! ## 契约（What）
//! - 请求：`<method> <resource> HTTP/<version>\r\n`；响应：`HTTP/<version> <status> <reason>\r\n`；
//! - 之后按存储顺序每个头部一行 `<name>: <value>\r\n`，最后是单独的 `\r\n`；
//! - 无失败路径；不输出 body。
//!
//! ## 风险提示（Trade-offs）
//! - 编码不做语法校验：包含 `CRLF` 的字段会原样写出，调用方需保证自行构造的报文是良构的，
//!   否则解码结果与原报文不一致。

use alloc::vec::Vec;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::{
    fmt::{CRLF, header_pieces, start_line_pieces},
    types::Message,
};

/// 编码为按行切分的片段，顺序拼接即完整报文。
pub fn encode(message: &Message) -> Vec<Bytes> {
    let mut fragments = Vec::with_capacity(message.headers().len() + 2);
    fragments.push(freeze_pieces(&start_line_pieces(message.start_line())));
    for header in message.headers() {
        fragments.push(freeze_pieces(&header_pieces(header)));
    }
    fragments.push(Bytes::from_static(CRLF.as_bytes()));
    trace!(
        kind = %message.kind(),
        fragments = fragments.len(),
        "encoded handshake message"
    );
    fragments
}

/// 将完整报文追加到 `dst`。
pub fn encode_into(message: &Message, dst: &mut BytesMut) {
    dst.reserve(encoded_len(message));
    put_pieces(dst, &start_line_pieces(message.start_line()));
    for header in message.headers() {
        put_pieces(dst, &header_pieces(header));
    }
    dst.put_slice(CRLF.as_bytes());
}

/// 编码为单个连续缓冲。
pub fn encode_to_bytes(message: &Message) -> Bytes {
    let mut dst = BytesMut::new();
    encode_into(message, &mut dst);
    dst.freeze()
}

fn encoded_len(message: &Message) -> usize {
    let start: usize = start_line_pieces(message.start_line())
        .iter()
        .map(|piece| piece.len())
        .sum();
    let headers: usize = message
        .headers()
        .iter()
        .map(|header| header_pieces(header).iter().map(|piece| piece.len()).sum::<usize>())
        .sum();
    start + headers + CRLF.len()
}

fn freeze_pieces(pieces: &[&str]) -> Bytes {
    let len = pieces.iter().map(|piece| piece.len()).sum();
    let mut line = BytesMut::with_capacity(len);
    put_pieces(&mut line, pieces);
    line.freeze()
}

fn put_pieces(dst: &mut BytesMut, pieces: &[&str]) {
    for piece in pieces {
        dst.put_slice(piece.as_bytes());
    }
}
