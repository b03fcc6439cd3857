//! Verify builder behavior against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector case lists the setter inputs and either the expected request
//! (compared whole-value after deserializing) or the expected error. An
//! omitted input means the corresponding setter is never called.

use request_core::{BuildError, Method, Request, RequestBuilder};

/// Parse the method string from test vectors into `Method`.
fn parse_method(s: &str) -> Method {
    match s {
        "GET" => Method::Get,
        "POST" => Method::Post,
        "PUT" => Method::Put,
        "DELETE" => Method::Delete,
        "PATCH" => Method::Patch,
        "HEAD" => Method::Head,
        other => panic!("unknown method: {other}"),
    }
}

#[test]
fn build_test_vectors() {
    let raw = include_str!("../../test-vectors/build.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let mut builder = RequestBuilder::new();

        if let Some(url) = case["url"].as_str() {
            builder.url(Some(url)).unwrap();
        }
        if let Some(method) = case["method"].as_str() {
            builder.method(Some(parse_method(method))).unwrap();
        }
        if let Some(body) = case["body"].as_str() {
            builder.body(Some(body)).unwrap();
        }
        if let Some(headers) = case["headers"].as_array() {
            for pair in headers {
                let pair = pair.as_array().unwrap();
                builder
                    .header(
                        Some(pair[0].as_str().unwrap()),
                        Some(pair[1].as_str().unwrap()),
                    )
                    .unwrap();
            }
        }

        let result = builder.build();
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "MissingUrl" => {
                    assert!(matches!(err, BuildError::MissingUrl), "{name}: expected MissingUrl")
                }
                "MissingMethod" => {
                    assert!(matches!(err, BuildError::MissingMethod), "{name}: expected MissingMethod")
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let request = result.unwrap();
            let expected: Request =
                serde_json::from_value(case["expected_request"].clone()).unwrap();
            assert_eq!(request, expected, "{name}: built request");
        }
    }
}

#[test]
fn absent_argument_test_vectors() {
    let raw = include_str!("../../test-vectors/arguments.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        // A fully-configured builder, so any mutation would be visible.
        let mut builder = RequestBuilder::new();
        builder.url(Some("https://example.com")).unwrap();
        builder.method(Some(Method::Get)).unwrap();
        let before = builder.build().unwrap();

        let err = match case["setter"].as_str().unwrap() {
            "url" => builder.url(None).unwrap_err(),
            "method" => builder.method(None).unwrap_err(),
            "body" => builder.body(None).unwrap_err(),
            "header_name" => builder.header(None, Some("1")).unwrap_err(),
            "header_value" => builder.header(Some("x-test"), None).unwrap_err(),
            other => panic!("{name}: unknown setter: {other}"),
        };

        let expected = case["expected_argument"].as_str().unwrap();
        match err {
            BuildError::MissingArgument(argument) => {
                assert_eq!(argument, expected, "{name}: argument at fault")
            }
            other => panic!("{name}: expected MissingArgument, got {other:?}"),
        }

        // The failed call must leave the builder untouched.
        assert_eq!(builder.build().unwrap(), before, "{name}: builder state");
    }
}
