use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::PendingLogin, warning, youtube::auth::exchange_code_pkce};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PendingLogin>>>>,
) -> Html<&'static str> {
    let mut state = shared_state.lock().await;
    let Some(pending) = state.as_mut() else {
        return Html("<h4>No login in progress.</h4>");
    };

    if let Some(reason) = params.get("error") {
        pending.denied = Some(reason.clone());
        return Html("<h4>Login cancelled.</h4><p>You can close this window.</p>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    match exchange_code_pkce(&pending.client, code, &pending.code_verifier, &pending.redirect_uri)
        .await
    {
        Ok(token) => {
            pending.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            pending.denied = Some(e.to_string());
            Html("<h4>Login failed.</h4>")
        }
    }
}
