//! `OmdbClient` tests against a local mock server.

use cinelog_core::MetadataLookup;
use serde_json::json;
use wiremock::{
  Mock, MockServer, ResponseTemplate,
  matchers::{method, path, query_param},
};

use crate::{Error, OmdbClient, OmdbConfig};

async fn client_for(server: &MockServer) -> OmdbClient {
  let config = OmdbConfig {
    api_key:         Some("test-key".into()),
    base_url:        format!("{}/", server.uri()),
    poster_base_url: "http://img.example/".into(),
  };
  OmdbClient::new(config).expect("client")
}

#[tokio::test]
async fn lookup_found_movie() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/"))
    .and(query_param("apikey", "test-key"))
    .and(query_param("t", "Inception"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Title": "Inception",
      "Year": "2010",
      "imdbRating": "8.8",
      "imdbID": "tt1375666",
      "Response": "True"
    })))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let found = client.lookup("Inception").await.unwrap();

  assert_eq!(found.title, "Inception");
  assert_eq!(found.year, 2010);
  assert_eq!(found.rating, Some(8.8));
  assert_eq!(found.imdb_id.as_deref(), Some("tt1375666"));
}

#[tokio::test]
async fn lookup_unrated_movie_has_no_rating() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Title": "Obscure Short",
      "Year": "2021",
      "imdbRating": "N/A",
      "imdbID": "",
      "Response": "True"
    })))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let found = client.lookup("Obscure Short").await.unwrap();

  assert_eq!(found.rating, None);
  assert_eq!(found.imdb_id, None);
}

#[tokio::test]
async fn lookup_not_found_carries_api_message() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Response": "False",
      "Error": "Movie not found!"
    })))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let err = client.lookup("Zzzzz").await.unwrap_err();

  assert!(matches!(err, Error::NotFound(ref msg) if msg == "Movie not found!"));
}

#[tokio::test]
async fn lookup_http_error_status() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let err = client.lookup("Inception").await.unwrap_err();

  assert!(matches!(err, Error::Status(401)));
}

#[tokio::test]
async fn lookup_non_json_body_is_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let err = client.lookup("Inception").await.unwrap_err();

  assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn lookup_bad_year_is_malformed() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Title": "Mystery",
      "Year": "N/A",
      "imdbRating": "5.0",
      "imdbID": "tt0000001",
      "Response": "True"
    })))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let err = client.lookup("Mystery").await.unwrap_err();

  assert!(matches!(err, Error::Malformed(_)));
}

#[tokio::test]
async fn poster_url_embeds_key_and_id() {
  let server = MockServer::start().await;
  let client = client_for(&server).await;

  assert_eq!(
    client.poster_url("tt1375666"),
    "http://img.example/?apikey=test-key&i=tt1375666"
  );
}

#[tokio::test]
async fn lookup_without_key_sends_no_request() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&server)
    .await;

  let client = OmdbClient::new(OmdbConfig {
    api_key:         None,
    base_url:        format!("{}/", server.uri()),
    poster_base_url: "http://img.example/".into(),
  })
  .unwrap();
  let err = client.lookup("Inception").await.unwrap_err();

  assert!(matches!(err, Error::MissingApiKey));
  assert_eq!(err.to_string(), "no OMDb API key configured");
}
