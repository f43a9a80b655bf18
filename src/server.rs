// HTTP bridge: POST /execute runs one command line and returns the response line as JSON

use std::{net::SocketAddr, sync::Arc};

use axum::{extract::State, routing::post, Json, Router};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    command_loop::{evaluate, Step},
    config::HotelConfig,
    hotel::Hotel,
    response::Response,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecuteRequest {
    pub command: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExecuteResponse {
    pub output: String,
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<HotelConfig>,
    hotel: Arc<Mutex<Hotel>>,
}

impl AppState {
    pub fn new(config: HotelConfig) -> Self {
        let hotel = Hotel::new(&config);
        Self {
            config: Arc::new(config),
            hotel: Arc::new(Mutex::new(hotel)),
        }
    }

    // Every request gets a line back. EXIT starts over with fresh inventory.
    pub fn execute_line(&self, line: &str) -> String {
        let mut hotel = self.hotel.lock();

        let response = match evaluate(&mut hotel, line) {
            Step::Respond(response) => response,
            Step::Skip => Response::error("Invalid command"),
            Step::Exit => {
                *hotel = Hotel::new(&self.config);
                info!("hotel restarted on EXIT");
                Response::Restarted
            }
        };

        response.to_string()
    }
}

pub async fn execute(
    State(state): State<AppState>,
    Json(request): Json<ExecuteRequest>,
) -> Json<ExecuteResponse> {
    Json(ExecuteResponse {
        output: state.execute_line(&request.command),
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/execute", post(execute))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, config: HotelConfig) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("hotel bridge listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
