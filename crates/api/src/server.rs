//! Server lifecycle.

use std::future::Future;

use regviz_core::Validator;
use tokio::net::TcpListener;

use crate::{config::ApiConfig, error::ServerError, router::create_router, state::AppState};

/// Install the global subscriber from `config.log`, with `REGVIZ_LOG*`
/// variables applied on top.
pub fn init_logging(config: &ApiConfig) -> Result<(), ServerError> {
    regviz_log::init_with(config.log.clone().with_env_overrides())?;
    Ok(())
}

/// Run the server until Ctrl-C or SIGTERM.
pub async fn serve(config: ApiConfig) -> Result<(), ServerError> {
    serve_with_shutdown(config, shutdown_signal()).await
}

/// Run the server until `signal` resolves, then drain in-flight requests.
pub async fn serve_with_shutdown<F>(config: ApiConfig, signal: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Some(dir) = config.static_dir.as_ref().filter(|dir| !dir.is_dir()) {
        return Err(ServerError::StaticDir(dir.clone()));
    }

    let state = AppState::new(Validator::new(config.limits));
    let limits = state.validator().limits();
    let app = create_router(state, &config);

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(
        addr = %local_addr,
        static_dir = ?config.static_dir,
        cors = config.cors,
        size_limit = limits.size_limit,
        nest_limit = limits.nest_limit,
        "regviz server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("regviz server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
