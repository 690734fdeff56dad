//! 请求行解析。
//!
//! ## 模块目的（Why）
//! - 将 `METHOD SP RESOURCE SP HTTP/<major>.<minor>` 解析为 [`RequestLine`]。
//!
//! ## 语法口径（What）
//! - [`RequestGrammar::Token`]：方法为任意 token，资源为一个或多个非空白字符；
//! - [`RequestGrammar::Reference`]：方法只能为 `GET`（大小写无关），资源恰为一个非空白字符；
//! - 两种口径字段集合与失败语义相同，捕获值保留原始大小写。

use crate::{
    error::{DecodeError, Malformation},
    options::RequestGrammar,
    types::RequestLine,
};

use super::common::{FIELD_SEPARATORS, is_token, parse_http_version};

pub(super) fn parse_request_line(
    line: &str,
    grammar: RequestGrammar,
) -> Result<RequestLine, DecodeError> {
    let invalid = || DecodeError::malformed(Malformation::InvalidRequestLine);

    let mut parts = line.split(FIELD_SEPARATORS).filter(|part| !part.is_empty());
    let method = parts.next().ok_or_else(invalid)?;
    let resource = parts.next().ok_or_else(invalid)?;
    let protocol = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    let version = parse_http_version(protocol).ok_or_else(invalid)?;
    if resource.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let accepted = match grammar {
        RequestGrammar::Token => is_token(method),
        RequestGrammar::Reference => {
            method.eq_ignore_ascii_case("GET") && resource.chars().count() == 1
        }
    };
    if !accepted {
        return Err(invalid());
    }

    Ok(RequestLine::new(method, resource, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(line: &str) -> Result<RequestLine, DecodeError> {
        parse_request_line(line, RequestGrammar::Token)
    }

    fn reference(line: &str) -> Result<RequestLine, DecodeError> {
        parse_request_line(line, RequestGrammar::Reference)
    }

    #[test]
    fn both_grammars_accept_single_char_get() {
        let expected = RequestLine::new("GET", "/", "1.1");
        assert_eq!(token("GET / HTTP/1.1"), Ok(expected.clone()));
        assert_eq!(reference("GET / HTTP/1.1"), Ok(expected));
    }

    /// 字面量大小写无关，但捕获值保持原样。
    #[test]
    fn literal_tokens_match_case_insensitively() {
        assert_eq!(
            reference("get * http/1.0"),
            Ok(RequestLine::new("get", "*", "1.0"))
        );
    }

    #[test]
    fn token_grammar_accepts_paths_and_methods() {
        assert_eq!(
            token("POST /chat?room=1 HTTP/1.1"),
            Ok(RequestLine::new("POST", "/chat?room=1", "1.1"))
        );
        assert_eq!(
            token("OPTIONS\t*  HTTP/1.1"),
            Ok(RequestLine::new("OPTIONS", "*", "1.1"))
        );
    }

    #[test]
    fn reference_grammar_rejects_other_methods_and_long_paths() {
        assert!(reference("POST / HTTP/1.1").is_err());
        assert!(reference("GET /chat HTTP/1.1").is_err());
    }

    #[test]
    fn malformed_lines_are_rejected() {
        for line in [
            "GET /",
            "GET / HTTP/1.1 extra",
            "GET / HTTP/1",
            "GET / FTP/1.1",
            "G(T / HTTP/1.1",
            "GET /a\u{c}b HTTP/1.1",
        ] {
            assert_eq!(
                token(line),
                Err(DecodeError::malformed(Malformation::InvalidRequestLine)),
                "{line}"
            );
        }
    }
}
