//! Bind and serve the site.

use lectern_core::{Error, Result};
use tokio::net::TcpListener;

use crate::routes::router;
use crate::state::SiteState;

/// Serve the site on `host:port` until Ctrl-C.
pub async fn serve(state: SiteState, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::config(format!("could not bind {addr}: {e}")))?;
    serve_on(state, listener).await
}

/// Serve the site on an already-bound listener.
pub async fn serve_on(state: SiteState, listener: TcpListener) -> Result<()> {
    let local = listener.local_addr().map_err(Error::io)?;
    tracing::info!(
        addr = %local,
        pages = state.registry().pages().len(),
        content = %state.content_dir().display(),
        "serving site"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::io)?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SiteMeta;
    use lectern_content::{ContentRegistry, MarkdownRenderer};

    #[tokio::test]
    async fn test_bind_failure_is_config_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let state = SiteState::new(
            ContentRegistry::builtin().unwrap(),
            MarkdownRenderer::default(),
            "/unused",
            vec![],
            SiteMeta::default(),
        );
        let err = serve(state, "127.0.0.1", port).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
