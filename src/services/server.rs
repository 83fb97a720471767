use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::{create_router, AppState};
use crate::database::SqliteStore;
use crate::services::TournamentService;

pub struct ServerService {
    port: u16,
    store: SqliteStore,
}

impl ServerService {
    pub fn new(port: u16, store: SqliteStore) -> Self {
        Self { port, store }
    }

    pub async fn run(self) -> Result<()> {
        let state = Arc::new(AppState {
            service: TournamentService::new(self.store),
        });

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
