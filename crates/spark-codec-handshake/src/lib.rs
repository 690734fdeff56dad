#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # spark-codec-handshake
//!
//! ## 教案目的（Why）
//! - **定位**：负责协议握手阶段 HTTP 风格文本报文（起始行 + 头部）的解析与生成，例如 WebSocket Upgrade。
//! - **架构角色**：本 crate 与传输完全解耦，只接收完整的 header 块字节并返回结构化 [`Message`]；
//!   套接字 I/O、握手编排、后续帧格式均由调用方负责。
//!
//! ## 交互契约（What）
//! - **输入前提**：调用方缓冲到完整的 header 块（起始行 + 头部 + 空行）后再调用 [`decode`]，本模块不做增量解析；
//! - **输出能力**：
//!   - [`decode`] / [`decode_with`] 返回 [`Message`] 或单一错误种类 [`DecodeError::MalformedMessage`]；
//!   - [`encode`] 返回按行切分的 [`bytes::Bytes`] 片段，顺序拼接即为完整报文；
//!   - [`get_header_value`] / [`get_start_line_value`] 提供大小写无关的只读查询。
//! - **后置条件**：`Message` 构造后不可变，可在多线程间共享读取。
//!
//! ## 实现策略（How）
//! - **模块划分**：
//!   1. `split`：按 `CRLF` 切分并裁剪空白；
//!   2. `decode`：起始行语法 + 头部语法，全有或全无；
//!   3. `encode` / `fmt`：序列化为行片段或写入 `fmt::Write`；
//!   4. `types`：报文模型与字段访问；
//!   5. `options`：解码配置（请求行语法、头部数量预算）；
//!   6. `error`：错误类型。
//! - 全部为自由函数，无全局解析器状态。
//!
//! ## 风险提示（Trade-offs）
//! - 头部查询为线性扫描，适合握手报文这类小而短命的数据；
//! - 不解释头部值语义（如 `Sec-WebSocket-Key` 校验），由上层握手逻辑完成。

extern crate alloc;

pub mod decode;
pub mod encode;
pub mod error;
pub mod fmt;
pub mod options;
pub mod split;
pub mod types;

pub use crate::decode::{decode, decode_request, decode_response, decode_with};
pub use crate::encode::{encode, encode_into, encode_to_bytes};
pub use crate::error::{DecodeError, Malformation, StartLineError};
pub use crate::fmt::write_message;
pub use crate::options::{DecodeOptions, RequestGrammar};
pub use crate::split::{Lines, split_lines};
pub use crate::types::{
    Header, Message, MessageKind, RequestLine, StartLine, StartLineField, StatusLine,
    get_header_value, get_start_line_value,
};
