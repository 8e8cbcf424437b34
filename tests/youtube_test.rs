use std::path::{Path, PathBuf};

use mockito::{Matcher, Server};
use reqwest::Url;
use serde_json::json;

use playlist_sync::{
    Config, Error,
    errors::Platform,
    youtube::{
        Session, SourcePlaylistReader,
        auth::{
            YOUTUBE_READONLY_SCOPE, authenticate, consent_url, exchange_code_pkce,
            parse_client_secret, read_client_secret,
        },
    },
};

// Helper function to point the YouTube reader at a mock server
fn test_config(server: &Server, page_size: u32) -> Config {
    Config {
        spotify_token: "test-token".to_string(),
        spotify_user_id: "me".to_string(),
        spotify_api_url: format!("{}/v1", server.url()),
        youtube_api_url: format!("{}/youtube/v3", server.url()),
        client_secret_file: PathBuf::from("client_secret.json"),
        youtube_access_token: Some("yt-token".to_string()),
        server_address: "127.0.0.1:8080".to_string(),
        ytdlp_path: "yt-dlp".to_string(),
        page_size,
    }
}

fn playlists_body() -> String {
    json!({
        "kind": "youtube#playlistListResponse",
        "items": [
            {"id": "PL-music-lower", "snippet": {"title": "music"}, "contentDetails": {"itemCount": 3}},
            {"id": "PL-music", "snippet": {"title": "Music"}, "contentDetails": {"itemCount": 40}}
        ]
    })
    .to_string()
}

const CLIENT_SECRET: &str = r#"{
  "installed": {
    "client_id": "123.apps.googleusercontent.com",
    "project_id": "playlist-sync",
    "auth_uri": "https://accounts.google.com/o/oauth2/auth",
    "token_uri": "https://oauth2.googleapis.com/token",
    "client_secret": "shh",
    "redirect_uris": ["http://localhost"]
  }
}"#;

#[tokio::test]
async fn test_resolve_playlist_id_exact_title() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/youtube/v3/playlists")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("part".into(), "snippet,contentDetails".into()),
            Matcher::UrlEncoded("maxResults".into(), "25".into()),
            Matcher::UrlEncoded("mine".into(), "true".into()),
        ]))
        .match_header("authorization", "Bearer yt-token")
        .with_status(200)
        .with_body(playlists_body())
        .create_async()
        .await;

    let reader = SourcePlaylistReader::new(&test_config(&server, 25));
    let playlist = reader
        .resolve_playlist_id(&Session::from_token("yt-token"), "Music")
        .await
        .unwrap();

    // Matching is case sensitive, "music" is skipped
    assert_eq!(playlist.id, "PL-music");
    assert_eq!(playlist.item_count, 40);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_resolve_playlist_id_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/youtube/v3/playlists")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(playlists_body())
        .create_async()
        .await;

    let reader = SourcePlaylistReader::new(&test_config(&server, 25));
    let err = reader
        .resolve_playlist_id(&Session::from_token("yt-token"), "MUSIC")
        .await
        .unwrap_err();

    match err {
        Error::NotFound { platform, name } => {
            assert_eq!(platform, Platform::YouTube);
            assert_eq!(name, "MUSIC");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_playlist_id_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/youtube/v3/playlists")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error":{"code":401,"message":"Invalid Credentials"}}"#)
        .create_async()
        .await;

    let reader = SourcePlaylistReader::new(&test_config(&server, 25));
    let err = reader
        .resolve_playlist_id(&Session::from_token("expired"), "Music")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Upstream(_)));
}

#[tokio::test]
async fn test_list_items_builds_watch_urls() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/youtube/v3/playlistItems")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("part".into(), "snippet".into()),
            Matcher::UrlEncoded("playlistId".into(), "PL-music".into()),
            Matcher::UrlEncoded("maxResults".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "items": [
                    {"snippet": {"title": "BTS - Boy With Luv", "resourceId": {"kind": "youtube#video", "videoId": "XsX3ATc3FbA"}}},
                    {"snippet": {"title": "Channel trailer", "resourceId": {"kind": "youtube#channel"}}},
                    {"snippet": {"title": "IU - Palette", "resourceId": {"kind": "youtube#video", "videoId": "d9IxdwEFk1c"}}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let reader = SourcePlaylistReader::new(&test_config(&server, 10));
    let items = reader
        .list_items(&Session::from_token("yt-token"), "PL-music")
        .await
        .unwrap();

    // Entries without a video id are left out, order is kept
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].raw_title, "BTS - Boy With Luv");
    assert_eq!(
        items[0].canonical_url,
        "https://www.youtube.com/watch?v=XsX3ATc3FbA"
    );
    assert_eq!(
        items[1].canonical_url,
        "https://www.youtube.com/watch?v=d9IxdwEFk1c"
    );
    mock.assert_async().await;
}

#[test]
fn test_parse_client_secret_installed() {
    let client = parse_client_secret(CLIENT_SECRET).unwrap();
    assert_eq!(client.client_id, "123.apps.googleusercontent.com");
    assert_eq!(client.client_secret, "shh");
    assert_eq!(client.token_uri, "https://oauth2.googleapis.com/token");
}

#[test]
fn test_parse_client_secret_web_section() {
    let web = CLIENT_SECRET.replace("\"installed\"", "\"web\"");
    assert!(parse_client_secret(&web).is_ok());
}

#[test]
fn test_parse_client_secret_invalid() {
    assert!(matches!(parse_client_secret("not json"), Err(Error::Auth(_))));
    assert!(matches!(parse_client_secret("{}"), Err(Error::Auth(_))));
}

#[tokio::test]
async fn test_read_client_secret_missing_file() {
    let result = read_client_secret(Path::new("/nonexistent/client_secret.json")).await;
    match result {
        Err(Error::Auth(reason)) => assert!(reason.contains("/nonexistent/client_secret.json")),
        other => panic!("expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_authenticate_without_token_needs_client_secret() {
    let server = Server::new_async().await;
    let mut config = test_config(&server, 25);
    config.youtube_access_token = None;
    config.client_secret_file = PathBuf::from("/nonexistent/client_secret.json");

    assert!(matches!(authenticate(&config).await, Err(Error::Auth(_))));
}

#[tokio::test]
async fn test_authenticate_uses_configured_token() {
    let server = Server::new_async().await;
    let config = test_config(&server, 25);

    let session = authenticate(&config).await.unwrap();
    assert_eq!(session.access_token(), "yt-token");
}

#[test]
fn test_consent_url_requests_readonly_scope() {
    let client = parse_client_secret(CLIENT_SECRET).unwrap();
    let url = consent_url(&client, "http://127.0.0.1:8080/callback", "challenge").unwrap();
    let url = Url::parse(&url).unwrap();

    assert_eq!(url.host_str(), Some("accounts.google.com"));

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let get = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(get("scope"), Some(YOUTUBE_READONLY_SCOPE));
    assert_eq!(get("redirect_uri"), Some("http://127.0.0.1:8080/callback"));
    assert_eq!(get("code_challenge"), Some("challenge"));
    assert_eq!(get("code_challenge_method"), Some("S256"));
    assert_eq!(get("response_type"), Some("code"));
}

#[tokio::test]
async fn test_exchange_code_pkce() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("code".into(), "auth-code".into()),
            Matcher::UrlEncoded("code_verifier".into(), "verifier".into()),
            Matcher::UrlEncoded("client_secret".into(), "shh".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"access_token":"ya29.token","expires_in":3599,"scope":"https://www.googleapis.com/auth/youtube.readonly","token_type":"Bearer"}"#)
        .create_async()
        .await;

    let mut client = parse_client_secret(CLIENT_SECRET).unwrap();
    client.token_uri = format!("{}/token", server.url());

    let token = exchange_code_pkce(&client, "auth-code", "verifier", "http://127.0.0.1:8080/callback")
        .await
        .unwrap();

    assert_eq!(token.access_token, "ya29.token");
    assert!(token.refresh_token.is_none());
    mock.assert_async().await;
}

#[test]
fn test_session_from_token() {
    assert_eq!(Session::from_token("abc").access_token(), "abc");
}
