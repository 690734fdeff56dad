//! 握手报文的线上示例。
//!
//! - **意图（Why）**：以真实的 WebSocket Upgrade 往返报文锁定解码/编码/查询的对外行为；
//! - **范围（What）**：只经由 crate 公开 API，不依赖内部模块。

use spark_codec_handshake::{
    DecodeOptions, Header, Message, MessageKind, RequestGrammar, RequestLine, StartLine,
    StatusLine, decode, decode_request, decode_response, decode_with, encode, encode_to_bytes,
    get_header_value, get_start_line_value, split_lines,
};

const UPGRADE_REQUEST: &[u8] = b"GET /chat HTTP/1.1\r\n\
Host: server.example.com\r\n\
Upgrade: websocket\r\n\
Connection: Upgrade\r\n\
Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\n\
Origin: http://example.com\r\n\
Sec-WebSocket-Protocol: chat, superchat\r\n\
Sec-WebSocket-Version: 13\r\n\
\r\n";

const UPGRADE_RESPONSE: &[u8] = b"HTTP/1.1 101 Switching Protocols\r\n\
Upgrade: websocket\r\n\
Connection: Upgrade\r\n\
Sec-WebSocket-Accept: s3pPLMBiTxaQ9kYGzzhZRbK+xOo=\r\n\
Sec-WebSocket-Protocol: chat\r\n\
\r\n";

#[test]
fn split_drops_empty_fragments() {
    let lines: Vec<&[u8]> = split_lines(b"a\r\n\r\nb\r\n").collect();
    assert_eq!(lines, [&b"a"[..], &b"b"[..]]);
}

#[test]
fn minimal_request_decodes_under_both_grammars() {
    let raw = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let expected = Message::request(
        RequestLine::new("GET", "/", "1.1"),
        [Header::new("Host", "example.com")],
    );
    assert_eq!(decode_request(raw).as_ref(), Ok(&expected));

    let reference = DecodeOptions::new().with_request_grammar(RequestGrammar::Reference);
    assert_eq!(decode_with(raw, MessageKind::Request, &reference), Ok(expected));
}

#[test]
fn switching_protocols_response_decodes() {
    let message = decode_response(b"HTTP/1.1 101 Switching Protocols\r\nUpgrade: websocket\r\n\r\n")
        .expect("101 response should decode");
    assert_eq!(get_start_line_value("version", &message), Some("1.1"));
    assert_eq!(get_start_line_value("status", &message), Some("101"));
    assert_eq!(
        get_start_line_value("reason", &message),
        Some("Switching Protocols")
    );
    assert_eq!(message.headers(), [Header::new("Upgrade", "websocket")]);
}

#[test]
fn post_is_rejected_by_reference_grammar() {
    let reference = DecodeOptions::new().with_request_grammar(RequestGrammar::Reference);
    let err = decode_with(
        b"POST / HTTP/1.1\r\nHost: example.com\r\n\r\n",
        MessageKind::Request,
        &reference,
    )
    .expect_err("reference grammar only accepts GET");
    assert!(err.is_malformed());
}

#[test]
fn header_without_colon_fails_whole_message() {
    let err = decode(
        b"HTTP/1.1 101 Switching Protocols\r\nUpgrade: websocket\r\nNoColonHere\r\n\r\n",
        MessageKind::Response,
    )
    .expect_err("missing colon");
    assert!(err.is_malformed());
}

#[test]
fn websocket_upgrade_exchange() {
    let request = decode_request(UPGRADE_REQUEST).expect("upgrade request");
    assert_eq!(
        request.start_line(),
        &StartLine::Request(RequestLine::new("GET", "/chat", "1.1"))
    );
    assert_eq!(request.headers().len(), 7);
    assert_eq!(
        get_header_value("sec-websocket-key", &request),
        Some("dGhlIHNhbXBsZSBub25jZQ==")
    );
    assert_eq!(get_header_value("HOST", &request), get_header_value("host", &request));
    assert_eq!(get_header_value("X-Missing", &request), None);

    let response = decode_response(UPGRADE_RESPONSE).expect("upgrade response");
    assert_eq!(
        response.start_line(),
        &StartLine::Response(StatusLine::new("1.1", "101", "Switching Protocols"))
    );
    assert_eq!(
        get_header_value("Sec-WebSocket-Accept", &response),
        Some("s3pPLMBiTxaQ9kYGzzhZRbK+xOo=")
    );

    // 规范化输入经编码后与原始字节完全一致。
    assert_eq!(encode_to_bytes(&request).as_ref(), UPGRADE_REQUEST);
    assert_eq!(encode(&response).concat(), UPGRADE_RESPONSE);
}

#[test]
fn decoded_message_is_shareable_across_threads() {
    let message = std::sync::Arc::new(decode_request(UPGRADE_REQUEST).expect("upgrade request"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let message = std::sync::Arc::clone(&message);
            std::thread::spawn(move || get_header_value("upgrade", &message).map(str::to_owned))
        })
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().expect("reader thread"),
            Some("websocket".to_owned())
        );
    }
}
