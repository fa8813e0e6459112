//! HTTP lookup server.
//!
//! Provides one endpoint:
//! - `GET /lookup?ip=<address>[&locale=<code>]` - geo and ASN data as JSON
//!
//! Every other path answers 404 and every other method on `/lookup` answers
//! 405, both with the same `{status, detail}` body as lookup failures.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;

use crate::config::LOOKUP_ROUTE;
use crate::storage::RangeStore;
use handlers::{lookup_handler, method_not_allowed, route_not_found};
pub use types::{AppState, LookupParams};

/// Builds the router for the lookup API.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: RangeStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            LOOKUP_ROUTE,
            get(lookup_handler::<S>).fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .with_state(state)
}

/// Binds `listen_address` and serves the lookup API until Ctrl-C.
pub async fn start_server<S>(listen_address: &str, state: AppState<S>) -> Result<(), anyhow::Error>
where
    S: RangeStore + Clone + Send + Sync + 'static,
{
    let listener = TcpListener::bind(listen_address).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind lookup server to {}: {}",
            listen_address,
            e
        )
    })?;

    info!("Lookup server listening on http://{}/", listen_address);
    info!(
        "  - Lookup: http://{}{}?ip=<address>",
        listen_address, LOOKUP_ROUTE
    );

    serve(listener, state).await
}

/// Serves the lookup API on an already bound listener until Ctrl-C.
pub async fn serve<S>(listener: TcpListener, state: AppState<S>) -> Result<(), anyhow::Error>
where
    S: RangeStore + Clone + Send + Sync + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Lookup server error: {}", e))?;

    info!("Lookup server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            // Without a signal handler the server can only be stopped externally.
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::IpVersion;
    use crate::config::ATTRIBUTION_MESSAGE;
    use crate::geoip::{LocationBlock, LocationText, NetworkRange, Tier};
    use crate::storage::MemoryStore;

    fn test_state() -> AppState<MemoryStore> {
        let mut store = MemoryStore::new();
        let mut block = LocationBlock::new(NetworkRange {
            cidr: "1.2.3.0/24".to_string(),
            prefix_length: 24,
            version: IpVersion::V4,
            start: 16909056,
            end: 16909311,
        });
        block.geoname_id = Some(5375480);
        store.insert_block(Tier::City, block);
        store.insert_text(
            Tier::City,
            5375480,
            "en",
            LocationText {
                city_name: Some("Mountain View".to_string()),
                country_iso_code: Some("US".to_string()),
                ..LocationText::default()
            },
        );
        AppState::new(store, ATTRIBUTION_MESSAGE, "en")
    }

    /// Serves `test_state()` on an ephemeral port and returns its base URL.
    async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(serve(listener, test_state()));
        format!("http://{}", address)
    }

    async fn send(method: reqwest::Method, path: &str) -> (u16, serde_json::Value) {
        let base = spawn_server().await;
        let response = reqwest::Client::new()
            .request(method, format!("{}{}", base, path))
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    #[tokio::test]
    async fn test_lookup_found() {
        let (status, body) = send(reqwest::Method::GET, "/lookup?ip=1.2.3.4").await;
        assert_eq!(status, 200);
        assert_eq!(body["status"], 200);
        assert_eq!(body["ip"], "1.2.3.4");
        assert_eq!(body["location"]["source"], "city");
        assert_eq!(body["location"]["geo"]["city"]["name"], "Mountain View");
        assert_eq!(body["location"]["geo"]["country"]["flag_emoji"], "\u{1F1FA}\u{1F1F8}");
        assert_eq!(body["message"], ATTRIBUTION_MESSAGE);
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let (status, body) = send(reqwest::Method::GET, "/lookup?ip=9.9.9.9").await;
        assert_eq!(status, 404);
        assert_eq!(body["detail"], "IP not found in ranges");
    }

    #[tokio::test]
    async fn test_lookup_invalid_ip() {
        let (status, body) = send(reqwest::Method::GET, "/lookup?ip=not-an-ip").await;
        assert_eq!(status, 400);
        assert_eq!(body["status"], 400);
        assert_eq!(body["detail"], "Invalid IP address");
    }

    #[tokio::test]
    async fn test_lookup_missing_ip() {
        for path in ["/lookup", "/lookup?ip=", "/lookup?locale=en"] {
            let (status, body) = send(reqwest::Method::GET, path).await;
            assert_eq!(status, 400, "{}", path);
            assert_eq!(body["detail"], "Missing ip parameter", "{}", path);
        }
    }

    #[tokio::test]
    async fn test_malformed_query() {
        let (status, body) = send(reqwest::Method::GET, "/lookup?ip=1.2.3.4&ip=5.6.7.8").await;
        assert_eq!(status, 400);
        assert_eq!(body["detail"], "Invalid request");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = send(reqwest::Method::GET, "/status").await;
        assert_eq!(status, 404);
        assert_eq!(body["status"], 404);
        assert_eq!(body["detail"], "Route not found");
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let (status, body) = send(reqwest::Method::POST, "/lookup?ip=1.2.3.4").await;
        assert_eq!(status, 405);
        assert_eq!(body["status"], 405);
        assert_eq!(body["detail"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        let err = start_server(&address, test_state()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to bind lookup server"));
        assert!(err.to_string().contains(&address));
    }
}
