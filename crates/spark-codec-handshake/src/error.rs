//! 错误类型模块。
//!
//! ## 模块目的（Why）
//! - 解码对外只有一种失败语义：报文格式错误。调用方无需区分“起始行坏了”还是“某个头坏了”；
//! - 排障时又需要知道是哪一行、哪条语法失败，因此错误内部携带诊断信息 [`Malformation`]，仅用于展示与日志。
//!
//! ## 使用契约（What）
//! - 解码 API 返回 [`DecodeError`]，唯一变体为 [`DecodeError::MalformedMessage`]；
//! - 动态字段表构造起始行时返回 [`StartLineError`]；
//! - 编码没有失败路径，故不定义编码错误。
//!
//! ## 风险提示（Trade-offs）
//! - 诊断信息只记录行号与语法类别，不复制原始文本，避免在日志中泄露头部值（如 Cookie）。

use core::fmt;

use thiserror::Error;

use crate::types::{MessageKind, StartLineField};

/// 解码失败。
///
/// # 教案式说明
/// - **意图 (Why)**：保持“全有或全无”的解码契约，只暴露单一错误种类；
/// - **契约 (What)**：任何起始行或头部语法失败都归入 `MalformedMessage`，`diagnostic` 仅供排障；
/// - **设计权衡 (Trade-offs)**：诊断枚举可以继续细分而不影响调用方的匹配代码。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// 起始行或头部不符合预期语法。
    #[error("malformed handshake message: {diagnostic}")]
    MalformedMessage {
        /// 失败位置与语法类别。
        diagnostic: Malformation,
    },
}

impl DecodeError {
    pub(crate) fn malformed(diagnostic: Malformation) -> Self {
        Self::MalformedMessage { diagnostic }
    }

    /// 是否为格式错误；当前唯一的错误种类，恒为 `true`。
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedMessage { .. })
    }

    /// 返回内部诊断信息。
    pub fn diagnostic(&self) -> &Malformation {
        match self {
            Self::MalformedMessage { diagnostic } => diagnostic,
        }
    }
}

/// 格式错误的内部诊断。行号从 0 开始，按切分后的逻辑行计数（0 为起始行）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// 输入切分后没有任何行。
    MissingStartLine,
    /// 请求行不符合 `METHOD SP RESOURCE SP HTTP/<major>.<minor>`。
    InvalidRequestLine,
    /// 状态行不符合 `HTTP/<major>.<minor> SP <3 digits> SP <reason>`。
    InvalidStatusLine,
    /// 头部行缺少冒号，或名称/值为空。
    InvalidHeader {
        /// 出错的逻辑行号。
        line: usize,
    },
    /// 该行不是合法的 UTF-8 文本。
    NonUtf8 {
        /// 出错的逻辑行号。
        line: usize,
    },
    /// 头部行数超过 [`DecodeOptions::max_headers`](crate::DecodeOptions::max_headers)。
    TooManyHeaders {
        /// 配置的上限。
        limit: usize,
    },
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStartLine => f.write_str("no start-line found"),
            Self::InvalidRequestLine => {
                f.write_str("request line does not match `METHOD SP RESOURCE SP HTTP/x.y`")
            }
            Self::InvalidStatusLine => {
                f.write_str("status line does not match `HTTP/x.y SP 3DIGIT SP reason`")
            }
            Self::InvalidHeader { line } => {
                write!(f, "line {line} is not a `name: value` header")
            }
            Self::NonUtf8 { line } => write!(f, "line {line} is not valid UTF-8"),
            Self::TooManyHeaders { limit } => {
                write!(f, "header block exceeds the limit of {limit} lines")
            }
        }
    }
}

/// 由动态字段表构造起始行失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartLineError {
    /// 缺少该报文种类要求的字段。
    #[error("{kind} start-line is missing field `{field}`")]
    MissingField {
        /// 目标报文种类。
        kind: MessageKind,
        /// 缺失的字段。
        field: StartLineField,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_diagnostic() {
        let err = DecodeError::malformed(Malformation::InvalidHeader { line: 3 });
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "malformed handshake message: line 3 is not a `name: value` header"
        );
        assert_eq!(*err.diagnostic(), Malformation::InvalidHeader { line: 3 });
    }

    #[test]
    fn missing_field_names_kind_and_field() {
        let err = StartLineError::MissingField {
            kind: MessageKind::Response,
            field: StartLineField::Reason,
        };
        assert_eq!(err.to_string(), "response start-line is missing field `reason`");
    }
}
