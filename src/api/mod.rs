// src/api/mod.rs
//
// HTTP adapter for the decision engine. One JSON endpoint carries both the
// handshake and the weekly decision step; the engine itself never sees the
// transport. Every request gets a 200 with a valid body: the game server
// treats anything else as a forfeited week.

use std::env;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::engine::{self, EngineConfig};
use crate::model::{weeks_from_value, RoleTable};

/// Identity reported during the capability handshake.
#[derive(Debug, Clone)]
pub struct HandshakeMeta {
    pub student_email: String,
    pub algorithm_name: String,
    pub version: String,
}

impl HandshakeMeta {
    /// Reads identity overrides from the environment, with shippable
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            student_email: env::var("BEERBOT_STUDENT_EMAIL")
                .unwrap_or_else(|_| "student@example.com".to_string()),
            algorithm_name: env::var("BEERBOT_ALGO_NAME")
                .unwrap_or_else(|_| "ApioLite".to_string()),
            version: env::var("BEERBOT_VERSION")
                .unwrap_or_else(|_| format!("v{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

pub struct AppState {
    pub config: EngineConfig,
    pub handshake: HandshakeMeta,
}

#[derive(Debug, Serialize)]
struct SupportedModes {
    blackbox: bool,
    glassbox: bool,
}

#[derive(Debug, Serialize)]
struct HandshakeResponse {
    ok: bool,
    student_email: String,
    algorithm_name: String,
    version: String,
    supports: SupportedModes,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct DecisionResponse {
    orders: RoleTable<u32>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ApiResponse {
    Handshake(HandshakeResponse),
    Decision(DecisionResponse),
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        // Some deployments mount us at the root, others under /api.
        .route("/", post(decision))
        .route("/api/decision", post(decision))
        .with_state(state)
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handles both protocol steps on one path, mirroring the wire contract:
/// `{"handshake": true}` gets the capability descriptor, anything else is a
/// weekly decision request. The body is decoded leniently; a request we
/// cannot make sense of still gets the baseline order set.
async fn decision(State(state): State<Arc<AppState>>, body: Bytes) -> Json<ApiResponse> {
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();

    if body.get("handshake").and_then(|v| v.as_bool()) == Some(true) {
        return Json(ApiResponse::Handshake(HandshakeResponse {
            ok: true,
            student_email: state.handshake.student_email.clone(),
            algorithm_name: state.handshake.algorithm_name.clone(),
            version: state.handshake.version.clone(),
            supports: SupportedModes {
                blackbox: true,
                glassbox: false,
            },
            message: "BeerBot ready",
        }));
    }

    // `mode` is accepted but glassbox currently decides exactly like
    // blackbox, as advertised in the handshake.
    let weeks = weeks_from_value(&body);
    let orders = engine::decide_orders(&weeks, &state.config);
    Json(ApiResponse::Decision(DecisionResponse { orders }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            config: EngineConfig::default(),
            handshake: HandshakeMeta {
                student_email: "student@example.com".to_string(),
                algorithm_name: "ApioLite".to_string(),
                version: "v0.1.0".to_string(),
            },
        })
    }

    async fn post_decision(body: serde_json::Value) -> serde_json::Value {
        let Json(response) = decision(
            State(state()),
            Bytes::from(serde_json::to_vec(&body).unwrap()),
        )
        .await;
        serde_json::to_value(&response).unwrap()
    }

    #[tokio::test]
    async fn handshake_returns_the_capability_descriptor() {
        let response = post_decision(json!({ "handshake": true })).await;
        assert_eq!(response["ok"], json!(true));
        assert_eq!(response["message"], json!("BeerBot ready"));
        assert_eq!(response["supports"]["blackbox"], json!(true));
        assert_eq!(response["supports"]["glassbox"], json!(false));
        assert_eq!(response["student_email"], json!("student@example.com"));
    }

    #[tokio::test]
    async fn empty_history_gets_the_baseline_order_set() {
        let response = post_decision(json!({ "weeks": [] })).await;
        let expected = json!({ "orders": {
            "retailer": 10, "wholesaler": 10, "distributor": 10, "factory": 10
        }});
        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn missing_weeks_field_also_gets_the_baseline() {
        let response = post_decision(json!({ "mode": "blackbox" })).await;
        assert_eq!(response["orders"]["factory"], json!(10));
    }

    #[tokio::test]
    async fn unparseable_body_still_answers_with_orders() {
        let Json(response) = decision(State(state()), Bytes::from_static(b"not json")).await;
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["orders"]["retailer"], json!(10));
    }

    #[tokio::test]
    async fn weekly_request_returns_one_order_per_role() {
        let week = json!({
            "week": 1,
            "roles": {
                "retailer": { "inventory": 12, "backlog": 0, "incoming_orders": 4, "arriving_shipments": 4 },
                "wholesaler": { "inventory": 12, "backlog": 0, "incoming_orders": 4, "arriving_shipments": 4 },
                "distributor": { "inventory": 12, "backlog": 0, "incoming_orders": 4, "arriving_shipments": 4 },
                "factory": { "inventory": 12, "backlog": 0, "incoming_orders": 4, "arriving_shipments": 4 }
            },
            "orders": { "retailer": 4, "wholesaler": 4, "distributor": 4, "factory": 4 }
        });
        let response = post_decision(json!({ "weeks": [week], "mode": "blackbox" })).await;
        let orders = response["orders"].as_object().unwrap();
        assert_eq!(orders.len(), 4);
        for role in ["retailer", "wholesaler", "distributor", "factory"] {
            assert!(orders[role].as_u64().is_some());
        }
    }

    #[tokio::test]
    async fn glassbox_mode_decides_like_blackbox() {
        let weeks = json!({ "weeks": [], "mode": "glassbox" });
        let response = post_decision(weeks).await;
        assert_eq!(response["orders"]["retailer"], json!(10));
    }
}
