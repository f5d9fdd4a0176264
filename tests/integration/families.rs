//! Single-document family operations over real HTTP

use crate::integration::mock_server::{MockServerFixture, API_ROOT};
use akeneo_client::{AkeneoClient, Error, Family, RequestOpts};
use mockito::Matcher;
use serde_json::json;

fn shoes() -> Family {
    Family::new("shoes", "name")
        .with_attribute_as_image("picture")
        .with_attributes(["sku", "name", "picture"])
        .with_requirement("ecommerce", ["sku", "name"])
        .with_requirement("mobile", ["sku"])
        .with_label("en_US", "Shoes")
        .with_label("fr_FR", "Chaussures")
}

#[tokio::test]
async fn test_list_sends_only_recognized_options() {
    let mut fixture = MockServerFixture::new().await;
    let page = json!({
        "_links": {"self": {"href": "http://pim/api/rest/v1/families?page=2&limit=10"}},
        "current_page": 2,
        "_embedded": {"items": [
            {"_links": {"self": {"href": "http://pim/api/rest/v1/families/shoes"}}, "code": "shoes", "attribute_as_label": "name", "attribute_as_image": null, "attributes": ["sku", "name"]}
        ]}
    });
    let mock = fixture
        .server
        .mock("GET", format!("{}/families", API_ROOT).as_str())
        .match_query(Matcher::Exact("page=2&limit=10".to_string()))
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(page.to_string())
        .create_async()
        .await;

    let opts: RequestOpts = serde_json::from_value(json!({
        "page": "2",
        "limit": "10",
        "withCount": true,
        "bogus": "x"
    }))
    .unwrap();
    let resp = fixture.client().families().get_all(&opts).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.pagination.current_page, Some(2));
    assert_eq!(resp.items().len(), 1);
    assert_eq!(resp.items()[0].family.attributes, vec!["sku", "name"]);
    assert_eq!(
        resp.items()[0].links.self_href(),
        Some("http://pim/api/rest/v1/families/shoes")
    );
}

#[tokio::test]
async fn test_get_unknown_family_is_404() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"code":404,"message":"Resource `bogus` does not exist."}"#;
    let mock = fixture.mock_json("GET", "/families/bogus", 404, body).await;

    let err = fixture.client().families().get("bogus").await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.code(), Some(404));
    assert_eq!(err.status_text(), Some("404 Not Found"));
    assert_eq!(err.message(), body);
}

#[tokio::test]
async fn test_create_then_get_roundtrips() {
    let mut fixture = MockServerFixture::new().await;
    let family = shoes();
    let encoded = serde_json::to_value(&family).unwrap();

    let create = fixture
        .server
        .mock("POST", format!("{}/families", API_ROOT).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(encoded.clone()))
        .with_status(201)
        .create_async()
        .await;
    let get = fixture
        .mock_json("GET", "/families/shoes", 200, &encoded.to_string())
        .await;

    let client = fixture.client();
    client.families().create(&family).await.unwrap();
    let fetched = client.families().get("shoes").await.unwrap();

    create.assert_async().await;
    get.assert_async().await;
    assert_eq!(fetched, family);
}

#[tokio::test]
async fn test_create_reports_validation_failure_verbatim() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"code":422,"message":"Validation failed.","errors":[{"property":"code","message":"This value is already used."}]}"#;
    let _mock = fixture.mock_json("POST", "/families", 422, body).await;

    let err = fixture.client().families().create(&shoes()).await.unwrap_err();
    assert_eq!(err.code(), Some(422));
    assert_eq!(err.message(), body);
}

#[tokio::test]
async fn test_upsert_patches_partial_document() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("PATCH", format!("{}/families/shoes", API_ROOT).as_str())
        .match_body(Matcher::Json(json!({
            "code": "shoes",
            "attribute_as_label": "name",
            "labels": {"de_DE": "Schuhe"}
        })))
        .with_status(204)
        .create_async()
        .await;

    let patch = Family::new("shoes", "name").with_label("de_DE", "Schuhe");
    fixture.client().families().upsert(&patch).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = AkeneoClient::builder()
        .base_url("http://127.0.0.1:1/api/rest/v1")
        .access_token("t")
        .build()
        .unwrap();

    let err = client.families().get("shoes").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.code(), None);
}
