//! 报文模型定义。
//!
//! ## 模块目标（Why）
//! - 为解码与编码提供统一的数据模型，避免在握手层重复描述请求/响应结构；
//! - 用类型保证“起始行字段必须齐全”：请求行与状态行各自是三字段结构体，不存在半填充的起始行。
//!
//! ## 结构概览（What）
//! - [`MessageKind`] / [`StartLineField`]：报文种类与起始行字段名；
//! - [`RequestLine`] / [`StatusLine`] / [`StartLine`]：起始行；
//! - [`Header`]：按原文保存的头部名值对；
//! - [`Message`]：起始行 + 有序头部，构造后不可变；
//! - [`get_header_value`] / [`get_start_line_value`]：大小写无关的只读查询。
//!
//! ## 实现策略（How）
//! - 报文种类由 [`StartLine`] 的枚举分支承载，种类与字段集合不可能错配；
//! - 头部存储保持原始大小写与重复项，查询时按 ASCII 大小写无关比较；
//! - 所有字符串为拥有型 `String`，`Message` 不借用输入缓冲，可自由跨线程传递。
//!
//! ## 风险与扩展（Trade-offs）
//! - 头部查询为 O(n) 线性扫描，握手报文头部通常不超过数十个，不值得维护索引。

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::error::StartLineError;

/// 报文种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// 请求：`METHOD SP RESOURCE SP HTTP/x.y`。
    Request,
    /// 响应：`HTTP/x.y SP STATUS SP REASON`。
    Response,
}

impl MessageKind {
    /// 该种类起始行的字段，按线上出现顺序排列。
    pub fn fields(self) -> &'static [StartLineField; 3] {
        match self {
            Self::Request => &[
                StartLineField::Method,
                StartLineField::Resource,
                StartLineField::Version,
            ],
            Self::Response => &[
                StartLineField::Version,
                StartLineField::Status,
                StartLineField::Reason,
            ],
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => f.write_str("request"),
            Self::Response => f.write_str("response"),
        }
    }
}

/// 起始行字段名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartLineField {
    /// 请求方法。
    Method,
    /// 请求资源。
    Resource,
    /// 协议版本，形如 `1.1`，不含 `HTTP/` 前缀。
    Version,
    /// 三位状态码。
    Status,
    /// 原因短语。
    Reason,
}

impl StartLineField {
    /// 字段的文本名称。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Resource => "resource",
            Self::Version => "version",
            Self::Status => "status",
            Self::Reason => "reason",
        }
    }

    /// 按名称（ASCII 大小写无关）查找字段。
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::Method,
            Self::Resource,
            Self::Version,
            Self::Status,
            Self::Reason,
        ]
        .into_iter()
        .find(|field| field.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for StartLineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 请求起始行。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestLine {
    /// 请求方法，保留线上原始大小写。
    pub method: String,
    /// 请求资源。
    pub resource: String,
    /// 协议版本（`major.minor`）。
    pub version: String,
}

impl RequestLine {
    /// 构造请求行。
    pub fn new(
        method: impl Into<String>,
        resource: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            resource: resource.into(),
            version: version.into(),
        }
    }
}

/// 响应起始行。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusLine {
    /// 协议版本（`major.minor`）。
    pub version: String,
    /// 三位状态码文本。
    pub status: String,
    /// 原因短语，可为空。
    pub reason: String,
}

impl StatusLine {
    /// 构造状态行。
    pub fn new(
        version: impl Into<String>,
        status: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            status: status.into(),
            reason: reason.into(),
        }
    }

    /// 将状态码解析为整数；非数字文本返回 `None`。
    pub fn status_code(&self) -> Option<u16> {
        self.status.parse().ok()
    }
}

/// 起始行：请求行或状态行。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StartLine {
    /// 请求行。
    Request(RequestLine),
    /// 状态行。
    Response(StatusLine),
}

impl StartLine {
    /// 报文种类。
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Request(_) => MessageKind::Request,
            Self::Response(_) => MessageKind::Response,
        }
    }

    /// 读取字段值；字段不属于该种类时返回 `None`。
    pub fn get(&self, field: StartLineField) -> Option<&str> {
        let value = match (self, field) {
            (Self::Request(line), StartLineField::Method) => &line.method,
            (Self::Request(line), StartLineField::Resource) => &line.resource,
            (Self::Request(line), StartLineField::Version) => &line.version,
            (Self::Response(line), StartLineField::Version) => &line.version,
            (Self::Response(line), StartLineField::Status) => &line.status,
            (Self::Response(line), StartLineField::Reason) => &line.reason,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// 按线上顺序返回 `(字段, 值)` 视图。
    pub fn fields(&self) -> [(StartLineField, &str); 3] {
        match self {
            Self::Request(line) => [
                (StartLineField::Method, line.method.as_str()),
                (StartLineField::Resource, line.resource.as_str()),
                (StartLineField::Version, line.version.as_str()),
            ],
            Self::Response(line) => [
                (StartLineField::Version, line.version.as_str()),
                (StartLineField::Status, line.status.as_str()),
                (StartLineField::Reason, line.reason.as_str()),
            ],
        }
    }

    /// 由动态字段表构造起始行。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：握手层有时以名值表描述起始行（例如从配置或脚本中读取），需要在构造时拒绝缺字段的表；
    /// - **契约 (What)**：字段名大小写无关；不属于 `kind` 的名称被忽略；同名字段后者覆盖前者；
    ///   缺少任一必需字段返回 [`StartLineError::MissingField`]，报告按线上顺序第一个缺失的字段。
    pub fn from_fields<'a, I>(kind: MessageKind, fields: I) -> Result<Self, StartLineError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut slots: [Option<&'a str>; 3] = [None; 3];
        let expected = kind.fields();
        for (name, value) in fields {
            let Some(field) = StartLineField::from_name(name) else {
                continue;
            };
            if let Some(idx) = expected.iter().position(|candidate| *candidate == field) {
                slots[idx] = Some(value);
            }
        }

        let mut values = [""; 3];
        for (idx, slot) in slots.into_iter().enumerate() {
            values[idx] = slot.ok_or(StartLineError::MissingField {
                kind,
                field: expected[idx],
            })?;
        }
        let [first, second, third] = values;

        Ok(match kind {
            MessageKind::Request => Self::Request(RequestLine::new(first, second, third)),
            MessageKind::Response => Self::Response(StatusLine::new(first, second, third)),
        })
    }
}

/// 单个头部，名称与值均按原文保存。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    /// 头部名称，保留原始大小写。
    pub name: String,
    /// 头部值。
    pub value: String,
}

impl Header {
    /// 构造头部。
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// 名称是否与 `name` 相同（ASCII 大小写无关）。
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl<N, V> From<(N, V)> for Header
where
    N: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// 握手报文：起始行 + 有序头部。
///
/// # 教案式说明
/// - **意图 (Why)**：作为解码输出与编码输入的唯一实体；
/// - **契约 (What)**：字段私有，构造后只能通过 `&self` 读取，编解码均产生新值；
///   头部顺序即线上/插入顺序，重复项与大小写原样保留；
/// - **设计权衡 (Trade-offs)**：需要修改时调用 [`Message::into_parts`] 拆出所有权后重建。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    start_line: StartLine,
    headers: Vec<Header>,
}

impl Message {
    /// 由起始行与头部构造报文。
    pub fn new<I, H>(start_line: StartLine, headers: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<Header>,
    {
        Self {
            start_line,
            headers: headers.into_iter().map(Into::into).collect(),
        }
    }

    /// 构造请求报文。
    pub fn request<I, H>(line: RequestLine, headers: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<Header>,
    {
        Self::new(StartLine::Request(line), headers)
    }

    /// 构造响应报文。
    pub fn response<I, H>(line: StatusLine, headers: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<Header>,
    {
        Self::new(StartLine::Response(line), headers)
    }

    /// 报文种类。
    pub fn kind(&self) -> MessageKind {
        self.start_line.kind()
    }

    /// 起始行。
    pub fn start_line(&self) -> &StartLine {
        &self.start_line
    }

    /// 全部头部，按存储顺序。
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// 读取起始行字段。
    pub fn start_line_value(&self, field: StartLineField) -> Option<&str> {
        self.start_line.get(field)
    }

    /// 第一个名称匹配（大小写无关）的头部值。
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.is_named(name))
            .map(|header| header.value.as_str())
    }

    /// 所有名称匹配的头部值，按存储顺序。
    pub fn headers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |header| header.is_named(name))
            .map(|header| header.value.as_str())
    }

    /// 是否存在该名称的头部。
    pub fn contains_header(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header.is_named(name))
    }

    /// 拆出起始行与头部的所有权。
    pub fn into_parts(self) -> (StartLine, Vec<Header>) {
        (self.start_line, self.headers)
    }
}

/// 查询起始行字段值，`field_name` 大小写无关。
///
/// 名称不属于报文种类（如对请求查询 `status`）或不是已知字段时返回 `None`。
pub fn get_start_line_value<'m>(field_name: &str, message: &'m Message) -> Option<&'m str> {
    StartLineField::from_name(field_name).and_then(|field| message.start_line_value(field))
}

/// 查询头部值：线性扫描，返回第一个名称匹配（ASCII 大小写无关）的值，未命中返回 `None`。
pub fn get_header_value<'m>(name: &str, message: &'m Message) -> Option<&'m str> {
    message.header(name)
}
