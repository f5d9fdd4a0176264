//! NDJSON batch upsert over real HTTP

use crate::integration::mock_server::MockServerFixture;
use akeneo_client::{Error, Family};

fn families() -> Vec<Family> {
    vec![
        Family::new("shoes", "name").with_label("en_US", "Shoes"),
        Family::new("caps", ""),
    ]
}

fn ndjson(families: &[Family]) -> String {
    families
        .iter()
        .map(|f| format!("{}\n", serde_json::to_string(f).unwrap()))
        .collect()
}

#[tokio::test]
async fn test_batch_upsert_correlates_lines_in_order() {
    let mut fixture = MockServerFixture::new().await;
    let submitted = families();
    let reply = concat!(
        "{\"line\":1,\"code\":\"shoes\",\"status_code\":201}\n",
        "{\"line\":2,\"code\":\"caps\",\"status_code\":422,\"message\":\"Validation failed.\",",
        "\"errors\":[{\"property\":\"attribute_as_label\",\"message\":\"This value should not be blank.\"}]}\n"
    );
    let mock = fixture
        .mock_batch("/families", &ndjson(&submitted), 200, reply)
        .await;

    let lines = fixture
        .client()
        .families()
        .batch_upsert(&submitted)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(lines.len(), submitted.len());
    for (line, family) in lines.iter().zip(&submitted) {
        assert_eq!(line.entity_code(), Some(family.code.as_str()));
    }
    assert!(lines[0].is_success());
    assert_eq!(lines[1].status_code, 422);
    assert_eq!(lines[1].message.as_deref(), Some("Validation failed."));
}

#[tokio::test]
async fn test_batch_upsert_malformed_line_yields_no_results() {
    let mut fixture = MockServerFixture::new().await;
    let submitted = families();
    let reply = "{\"line\":1,\"code\":\"shoes\",\"status_code\":201}\n{\"line\":2,\n";
    let _mock = fixture
        .mock_batch("/families", &ndjson(&submitted), 200, reply)
        .await;

    let err = fixture
        .client()
        .families()
        .batch_upsert(&submitted)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_batch_upsert_whole_request_rejected() {
    let mut fixture = MockServerFixture::new().await;
    let submitted = families();
    let body = r#"{"code":415,"message":"\"application/json\" in \"Content-Type\" header is not valid."}"#;
    let _mock = fixture
        .mock_batch("/families", &ndjson(&submitted), 415, body)
        .await;

    let err = fixture
        .client()
        .families()
        .batch_upsert(&submitted)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(415));
    assert_eq!(err.message(), body);
}
