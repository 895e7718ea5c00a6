//! End-to-end tests of the reqwest transport against a mockito server.

use mockito::Matcher;
use pidman_client::{NewPid, PidSearch, PidmanClient, PidmanError, TargetUpdate};
use serde_json::json;

const DOMAIN: &str = "http://host/domains/1/";
const TARGET: &str = "http://target.example/";

async fn client_for(server: &mockito::ServerGuard) -> PidmanClient {
    let base_url = format!("{}/pidman", server.url());
    PidmanClient::new(&base_url, "testuser", "testuserpass").unwrap()
}

#[tokio::test]
async fn create_purl_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/pidman/purl/")
        .match_header("username", "testuser")
        .match_header("password", "dGVzdHVzZXJwYXNz")
        .match_header("content-type", "application/rest-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("domain".into(), DOMAIN.into()),
            Matcher::UrlEncoded("target_uri".into(), TARGET.into()),
        ]))
        .with_status(201)
        .with_body("http://host/purl/abc")
        .create_async()
        .await;

    let client = client_for(&server).await;
    let created = client
        .create_pid("purl", &NewPid::new(DOMAIN, TARGET))
        .await
        .unwrap();

    assert_eq!(created, "http://host/purl/abc");
    mock.assert_async().await;
}

#[tokio::test]
async fn list_domains_sends_no_credentials() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/pidman/domains/")
        .match_header("username", Matcher::Missing)
        .match_header("accept", "text/plain")
        .with_status(200)
        .with_body(r#"[{"id": 1, "name": "Default"}]"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let domains = client.list_domains().await.unwrap();

    assert_eq!(domains, json!([{"id": 1, "name": "Default"}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn search_pids_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/pidman/pids/".to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "ark".into()),
            Matcher::UrlEncoded("count".into(), "5".into()),
        ]))
        .match_header("password", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server).await;
    let body = client
        .search_pids(&PidSearch::new().with_type("ark").with_count(5))
        .await
        .unwrap();

    assert_eq!(body, "[]");
    mock.assert_async().await;
}

#[tokio::test]
async fn update_target_sends_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/pidman/ark/bb/PDF")
        .match_body(Matcher::Json(json!({"proxy": "EZProxy"})))
        .with_status(200)
        .with_body(r#"{"proxy": "EZProxy", "active": true}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let target = client
        .update_ark_target("bb", "PDF", &TargetUpdate::new().with_proxy("EZProxy"))
        .await
        .unwrap();

    assert_eq!(target["active"], true);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_ark_target_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/pidman/ark/bb/")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server).await;
    assert!(client.delete_ark_target("bb", "").await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn reserved_qualifier_reaches_its_own_target() {
    let mut server = mockito::Server::new_async().await;
    let unqualified = server
        .mock("DELETE", "/pidman/ark/bb/")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;
    let fragment = server
        .mock("DELETE", "/pidman/ark/bb/%23PDF")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let query = server
        .mock("PUT", "/pidman/ark/bb/%3Fx%3D1")
        .match_body(Matcher::Json(json!({"active": false})))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server).await;
    assert!(client.delete_ark_target("bb", "#PDF").await.unwrap());
    client
        .update_ark_target("bb", "?x=1", &TargetUpdate::new().with_active(false))
        .await
        .unwrap();

    fragment.assert_async().await;
    query.assert_async().await;
    unqualified.assert_async().await;
}

#[tokio::test]
async fn not_found_carries_status_and_url() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/pidman/ark/missing")
        .with_status(404)
        .with_body("no such pid")
        .create_async()
        .await;

    let client = client_for(&server).await;
    let err = client.get_ark("missing").await.unwrap_err();

    match err {
        PidmanError::Http { url, status, reason, body } => {
            assert_eq!(url, "/pidman/ark/missing");
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
            assert_eq!(body, "no such pid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let client = PidmanClient::new("http://127.0.0.1:1/pidman", "u", "p").unwrap();
    let err = client.list_domains().await.unwrap_err();
    assert!(matches!(err, PidmanError::Transport(_)));
    assert!(!err.is_local());
}
