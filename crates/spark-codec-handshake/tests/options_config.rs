//! 从配置文件加载解码选项（需启用 `serde` 特性）。
#![cfg(feature = "serde")]

use spark_codec_handshake::{DecodeOptions, MessageKind, RequestGrammar, decode_with};

#[test]
fn options_load_from_toml() {
    let options: DecodeOptions = toml::from_str(
        r#"
request_grammar = "reference"
max_headers = 2
"#,
    )
    .expect("valid handshake options");
    assert_eq!(
        options,
        DecodeOptions::new()
            .with_request_grammar(RequestGrammar::Reference)
            .with_max_headers(2)
    );

    let raw = b"GET / HTTP/1.1\r\nHost: a\r\nUpgrade: websocket\r\nConnection: Upgrade\r\n\r\n";
    assert!(decode_with(raw, MessageKind::Request, &options).is_err());
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let options: DecodeOptions = toml::from_str("").expect("empty table");
    assert_eq!(options, DecodeOptions::default());

    let options: DecodeOptions =
        serde_json::from_str(r#"{"request_grammar":"token"}"#).expect("json options");
    assert_eq!(options.request_grammar, RequestGrammar::Token);
    assert_eq!(options.max_headers, None);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<DecodeOptions>("max_header = 3").is_err());
}
