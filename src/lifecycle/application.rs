//! Application bootstrap
//!
//! Wires configuration and the order repository into the HTTP layer by plain
//! parameter passing.

use axum::{Router, middleware};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use super::shutdown_signal;
use crate::config::AppConfig;
use crate::controller::OrderController;
use crate::error::{OrderAppError, Result};
use crate::interceptor::log_requests;
use crate::repository::OrderRepository;

/// A fully wired order service
///
/// # Example
///
/// ```rust,no_run
/// use order_app::config::AppConfig;
/// use order_app::lifecycle::Application;
/// use order_app::repository::InMemoryOrderRepository;
/// use std::sync::Arc;
///
/// # async fn run() -> order_app::Result<()> {
/// let app = Application::builder()
///     .config(AppConfig::default())
///     .repository(Arc::new(InMemoryOrderRepository::new()))
///     .build()?;
///
/// app.serve().await
/// # }
/// ```
pub struct Application {
    config: AppConfig,
    router: Router,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    /// The assembled router, for in-process use
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind `host:port` from the config and serve until a shutdown signal.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr.as_str())
            .await
            .map_err(|e| OrderAppError::Internal(format!("Failed to bind {}: {}", addr, e)))?;
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener
            .local_addr()
            .map_err(|e| OrderAppError::Internal(e.to_string()))?;
        tracing::info!("Server running on http://{}", local);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Initiating graceful shutdown...");
            })
            .await
            .map_err(|e| OrderAppError::Internal(format!("Server error: {}", e)))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Builder for [`Application`]
#[derive(Default)]
pub struct ApplicationBuilder {
    config: Option<AppConfig>,
    repository: Option<Arc<dyn OrderRepository>>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn repository(mut self, repository: Arc<dyn OrderRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// # Errors
    ///
    /// Returns an error if no repository was provided. A missing config falls
    /// back to [`AppConfig::default`].
    pub fn build(self) -> Result<Application> {
        let repository = self
            .repository
            .ok_or_else(|| OrderAppError::Config("Order repository not provided".to_string()))?;
        let config = self.config.unwrap_or_default();

        let controller = Arc::new(OrderController::new(repository, config.not_found_policy));
        let router = OrderController::router(controller)
            .layer(ServiceBuilder::new().layer(middleware::from_fn(log_requests)));

        Ok(Application { config, router })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::HELLO_MESSAGE;
    use crate::repository::InMemoryOrderRepository;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[test]
    fn test_build_requires_repository() {
        let result = Application::builder().config(AppConfig::default()).build();
        assert!(matches!(result, Err(OrderAppError::Config(_))));
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let app = Application::builder()
            .repository(Arc::new(InMemoryOrderRepository::new()))
            .build()
            .unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(app.serve_with_shutdown(listener, async move {
            let _ = stop_rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /api/orders/hello HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200"));
        assert!(raw.to_ascii_lowercase().contains("x-request-id"));
        assert!(raw.ends_with(HELLO_MESSAGE));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
