use nimbus_api::{Client, Config, Error, ImageQuery, Query};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORG: &str = "d6a2cbd5-fd0b-4b54-a9cb-e5cd25ccf091";
const IMAGE_ID: &str = "5b00a97c-3f14-4fd1-acb0-8b1c26dc4c1a";

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), ORG).unwrap()
}

#[tokio::test]
async fn get_customer_image_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("customer_image.json");

    Mock::given(method("GET"))
        .and(path(format!(
            "/compute/v2/{}/image/customerImage/{}",
            ORG, IMAGE_ID
        )))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let image = client(&mock_server)
        .get_customer_image(IMAGE_ID)
        .await
        .unwrap()
        .expect("image should be present");

    assert_eq!(image.id, IMAGE_ID);
    assert_eq!(image.name, "web-base");
    assert_eq!(image.datacenter_id, "NA9");
    assert_eq!(image.memory_gb, 4);
    assert_eq!(image.disks.len(), 2);
    assert_eq!(image.disks[1].size_gb, 100);
}

#[tokio::test]
async fn get_customer_image_not_found_is_empty_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/compute/v2/{}/image/customerImage/{}",
            ORG, IMAGE_ID
        )))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(load_fixture("not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).get_customer_image(IMAGE_ID).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn get_customer_image_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/compute/v2/{}/image/customerImage/{}",
            ORG, IMAGE_ID
        )))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(load_fixture("unexpected_error.json")),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .get_customer_image(IMAGE_ID)
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            response_code,
            ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(response_code, "UNEXPECTED_ERROR");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn get_customer_image_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/compute/v2/{}/image/customerImage/{}",
            ORG, IMAGE_ID
        )))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .get_customer_image(IMAGE_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[tokio::test]
async fn get_customer_image_is_idempotent() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("customer_image.json");

    Mock::given(method("GET"))
        .and(path(format!(
            "/compute/v2/{}/image/customerImage/{}",
            ORG, IMAGE_ID
        )))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let first = client.get_customer_image(IMAGE_ID).await.unwrap().unwrap();
    let second = client.get_customer_image(IMAGE_ID).await.unwrap().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn find_customer_image_no_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/compute/v2/{}/image/customerImage", ORG)))
        .and(query_param("name", "missing"))
        .and(query_param("datacenterId", "NA9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("customer_images_empty.json")),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .find_customer_image("missing", "NA9")
        .await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn find_customer_image_single_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/compute/v2/{}/image/customerImage", ORG)))
        .and(query_param("name", "web-base"))
        .and(query_param("datacenterId", "NA9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("customer_images_single.json")),
        )
        .mount(&mock_server)
        .await;

    let image = client(&mock_server)
        .find_customer_image("web-base", "NA9")
        .await
        .unwrap()
        .expect("image should be present");
    assert_eq!(image.name, "web-base");
}

#[tokio::test]
async fn find_customer_image_ambiguous() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/compute/v2/{}/image/customerImage", ORG)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("customer_images_page.json")),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .find_customer_image("base", "NA9")
        .await
        .unwrap_err();

    match &err {
        Error::AmbiguousName { matches, .. } => assert_eq!(*matches, 2),
        other => panic!("expected Error::AmbiguousName, got {other:?}"),
    }
    // The error text reports the server's total count.
    assert!(err.to_string().contains("(2)"));
}

#[tokio::test]
async fn find_customer_image_http_failure_is_an_error() {
    // Unlike get-by-ID, a not-found envelope during a name lookup is an
    // error; only an empty page is an empty result.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/compute/v2/{}/image/customerImage", ORG)))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(load_fixture("not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).find_customer_image("web-base", "NA9").await;
    assert!(matches!(result, Err(Error::Api { .. })));
}

#[tokio::test]
async fn list_customer_images_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/compute/v2/{}/image/customerImage", ORG)))
        .and(query_param("pageNumber", "2"))
        .and(query_param("pageSize", "10"))
        .and(query_param("datacenterId", "NA9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("customer_images_page.json")),
        )
        .mount(&mock_server)
        .await;

    let query = ImageQuery::default()
        .with_page(2)
        .with_page_size(10)
        .with_datacenter("NA9");
    let page = client(&mock_server)
        .list_customer_images(&query)
        .await
        .unwrap();

    // pageCount is the number of items in this page, never the page total.
    assert_eq!(page.page_count, page.images.len() as i64);
    assert!(page.images.len() as i64 <= page.page_size);
    assert_eq!(page.total_count, 2);
    assert_eq!(page.images[1].name, "db-base");
}

#[tokio::test]
async fn export_customer_image_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/compute/v2/{}/image/exportImage", ORG)))
        .and(body_json(json!({
            "imageId": IMAGE_ID,
            "ovfPackagePrefix": "web-base-backup"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("export_accepted.json")),
        )
        .mount(&mock_server)
        .await;

    let export_id = client(&mock_server)
        .export_customer_image(IMAGE_ID, "web-base-backup")
        .await
        .unwrap();
    assert_eq!(export_id, "a4664ecb-60f7-4a0c-a9a0-3d0bd9b11e02");
}

#[tokio::test]
async fn export_customer_image_missing_export_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/compute/v2/{}/image/exportImage", ORG)))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("export_missing_id.json")),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .export_customer_image(IMAGE_ID, "web-base-backup")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField {
            field: "imageExportId",
            ..
        }
    ));
}

#[tokio::test]
async fn export_customer_image_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/compute/v2/{}/image/exportImage", ORG)))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(load_fixture("export_failed.json")),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .export_customer_image(IMAGE_ID, "web-base-backup")
        .await
        .unwrap_err();

    match err {
        Error::Api { response_code, .. } => {
            assert_eq!(response_code, "OPERATION_NOT_SUPPORTED");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_organization_aborts_before_any_request() {
    let mock_server = MockServer::start().await;

    // Any request reaching the server would fail the expect(0) check.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::new(Config::default().with_base_url(&mock_server.uri())).unwrap();
    let err = client.get_customer_image(IMAGE_ID).await.unwrap_err();
    assert!(matches!(err, Error::MissingOrganization));
}

#[tokio::test]
async fn get_os_image_success() {
    let mock_server = MockServer::start().await;
    let os_image_id = "16e9d1b3-8b55-4a35-9f0d-0a85b1b0c6a4";

    Mock::given(method("GET"))
        .and(path(format!(
            "/compute/v2/{}/image/osImage/{}",
            ORG, os_image_id
        )))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("os_image.json")))
        .mount(&mock_server)
        .await;

    let image = client(&mock_server)
        .get_os_image(os_image_id)
        .await
        .unwrap()
        .expect("image should be present");
    assert_eq!(image.os_image_key, "UBUNTU2404/64");
}

#[tokio::test]
async fn find_os_image_single_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/compute/v2/{}/image/osImage", ORG)))
        .and(query_param("name", "Ubuntu 24.04 64-bit"))
        .and(query_param("datacenterId", "NA9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("os_images_page.json")),
        )
        .mount(&mock_server)
        .await;

    let image = client(&mock_server)
        .find_os_image("Ubuntu 24.04 64-bit", "NA9")
        .await
        .unwrap()
        .expect("image should be present");
    assert_eq!(image.name, "Ubuntu 24.04 64-bit");
}

#[tokio::test]
async fn list_os_images_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/compute/v2/{}/image/osImage", ORG)))
        .and(query_param("pageNumber", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("os_images_page.json")),
        )
        .mount(&mock_server)
        .await;

    let page = client(&mock_server)
        .list_os_images(&ImageQuery::default())
        .await
        .unwrap();
    assert_eq!(page.page_count, 1);
    assert_eq!(page.images[0].os_image_key, "UBUNTU2404/64");
}
