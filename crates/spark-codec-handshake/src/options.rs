//! 解码配置。
//!
//! ## 模块目的（Why）
//! - 请求行语法存在两种口径：只接受 `GET` 与单字符资源的参考语法，以及接受任意方法 token 与多字符资源的通用语法；
//!   由调用方显式选择，而不是在解析器内部写死。
//! - 与 spark 其它编解码器的帧预算一致，允许为头部行数设定上限，防止对端构造超大 header 块。
//!
//! ## 使用方式（How）
//! - 默认值即通用语法 + 不限头部数量，[`crate::decode`] 直接使用默认值；
//! - 启用 `serde` 特性后可从 TOML/JSON 配置反序列化：
//!
//! ```toml
//! request_grammar = "reference"
//! max_headers = 64
//! ```

/// 请求行语法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RequestGrammar {
    /// 方法为任意 token，资源为一个或多个非空白字符。
    #[default]
    Token,
    /// 方法只能是 `GET`（大小写无关），资源恰为一个非空白字符。
    Reference,
}

/// 解码选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DecodeOptions {
    /// 请求行语法，对响应无影响。
    pub request_grammar: RequestGrammar,
    /// 头部行数上限；`None` 表示不限。
    pub max_headers: Option<usize>,
}

impl DecodeOptions {
    /// 默认选项。
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换请求行语法。
    pub fn with_request_grammar(mut self, grammar: RequestGrammar) -> Self {
        self.request_grammar = grammar;
        self
    }

    /// 设置头部行数上限。
    pub fn with_max_headers(mut self, limit: usize) -> Self {
        self.max_headers = Some(limit);
        self
    }
}
