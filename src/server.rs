use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{Error, Res, api, types::PendingLogin};

/// Binds the OAuth redirect listener. Must succeed before the consent URL is
/// opened.
pub async fn bind(address: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(address)
        .map_err(|e| Error::Auth(format!("invalid server address {address}: {e}")))?;

    TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Auth(format!("cannot listen on {address}: {e}")))
}

pub async fn start_api_server(
    listener: TcpListener,
    state: Arc<Mutex<Option<PendingLogin>>>,
) -> Res<()> {
    let app = Router::new().route("/callback", get(api::callback).layer(Extension(state)));

    axum::serve(listener, app).await?;
    Ok(())
}
