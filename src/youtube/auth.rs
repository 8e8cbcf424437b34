use std::{
    path::Path,
    sync::Arc,
    time::{Duration, Instant},
};

use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::{
    Config, Error, Res, info,
    server::{self, start_api_server},
    types::{ClientSecret, ClientSecretFile, PendingLogin, Token},
    utils, warning,
};

pub const YOUTUBE_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/youtube.readonly";

const LOGIN_TIMEOUT: Duration = Duration::from_secs(120);

/// An authenticated handle on the YouTube Data API.
///
/// Holds nothing but the bearer token, so a session obtained from the browser
/// login and one built from a pre-provisioned token behave identically.
#[derive(Debug, Clone)]
pub struct Session {
    access_token: String,
}

impl Session {
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// Returns a YouTube session for this run.
///
/// Uses `YOUTUBE_ACCESS_TOKEN` when configured. Otherwise runs the interactive
/// installed-app OAuth flow:
///
/// 1. **Client Secrets**: Reads the Google client-secret file
/// 2. **PKCE Setup**: Generates a code verifier and its SHA256 challenge
/// 3. **Listener**: Binds the local redirect listener
/// 4. **Browser Launch**: Opens the consent page (or prints its URL)
/// 5. **Callback**: Waits up to two minutes for the code exchange to finish
///
/// # Errors
///
/// [`Error::Auth`] if the client-secret file is missing or invalid, the
/// listener cannot bind, the user declines consent, the code exchange fails or
/// the wait times out.
pub async fn authenticate(config: &Config) -> Res<Session> {
    if let Some(token) = &config.youtube_access_token {
        return Ok(Session::from_token(token.clone()));
    }

    let client = read_client_secret(&config.client_secret_file).await?;
    login(config, client).await
}

pub async fn read_client_secret(path: &Path) -> Res<ClientSecret> {
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| Error::Auth(format!("cannot read {}: {}", path.display(), e)))?;
    parse_client_secret(&content)
}

pub fn parse_client_secret(content: &str) -> Res<ClientSecret> {
    let file: ClientSecretFile = serde_json::from_str(content)
        .map_err(|e| Error::Auth(format!("invalid client secret file: {}", e)))?;

    file.installed.or(file.web).ok_or_else(|| {
        Error::Auth("client secret file has neither an installed nor a web section".to_string())
    })
}

/// Builds the Google consent page URL for the read-only YouTube scope.
pub fn consent_url(client: &ClientSecret, redirect_uri: &str, code_challenge: &str) -> Res<String> {
    let url = Url::parse_with_params(
        &client.auth_uri,
        &[
            ("client_id", client.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", YOUTUBE_READONLY_SCOPE),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
        ],
    )
    .map_err(|e| Error::Auth(format!("invalid auth_uri {}: {}", client.auth_uri, e)))?;

    Ok(url.to_string())
}

async fn login(config: &Config, client: ClientSecret) -> Res<Session> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let redirect_uri = config.redirect_uri();
    let auth_url = consent_url(&client, &redirect_uri, &code_challenge)?;

    let shared_state = Arc::new(Mutex::new(Some(PendingLogin {
        code_verifier,
        client,
        redirect_uri,
        token: None,
        denied: None,
    })));

    let listener = server::bind(&config.server_address).await?;
    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(listener, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    info!("Sign in to YouTube in your browser...");
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let outcome = wait_for_token(shared_state).await;
    server.abort();

    outcome.map(|token| Session::from_token(token.access_token))
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<PendingLogin>>>) -> Res<Token> {
    let start = Instant::now();

    while start.elapsed() < LOGIN_TIMEOUT {
        {
            let lock = shared_state.lock().await;
            if let Some(pending) = lock.as_ref() {
                if let Some(token) = &pending.token {
                    return Ok(token.clone());
                }
                if let Some(reason) = &pending.denied {
                    return Err(Error::Auth(format!("login aborted: {}", reason)));
                }
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Err(Error::Auth(
        "timed out waiting for the YouTube login".to_string(),
    ))
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Google's installed-app clients must send their client secret alongside the
/// verifier.
///
/// # Errors
///
/// [`Error::Upstream`] on transport failure or a non-success status from the
/// token endpoint.
pub async fn exchange_code_pkce(
    client: &ClientSecret,
    code: &str,
    verifier: &str,
    redirect_uri: &str,
) -> Res<Token> {
    let res = Client::new()
        .post(&client.token_uri)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client.client_id.as_str()),
            ("client_secret", client.client_secret.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?
        .error_for_status()?;

    Ok(res.json::<Token>().await?)
}
