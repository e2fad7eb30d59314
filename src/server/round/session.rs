/// WebSocket session handler for a single round.
///
/// This actor relays the client's direction requests to its `RoundSession` and forwards every
/// update the round pushes back to the client as JSON.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web::http::StatusCode;
use actix_web_actors::ws;
use serde::Deserialize;
use uuid::Uuid;
use log::{info, warn};

use crate::game::{ArenaConfig, ArenaError};
use crate::server::round::messages::{
    ClientWsMessage, Register, RequestHeading, ServerWsMessage, Unregister,
};
use crate::server::round::server::{CreateRound, RoundSession};
use crate::server::ws_error::{http_error_response, ws_error_message};

pub struct RoundSocket {
    pub round_id: Uuid,
    pub observer_id: Uuid,
    pub round_addr: Addr<RoundSession>,
}

impl Actor for RoundSocket {
    type Context = ws::WebsocketContext<Self>;

    /// Subscribe to the round's updates.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.round_addr.do_send(Register {
            observer_id: self.observer_id,
            addr: ctx.address().recipient(),
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[RoundSocket] Client left round {}", self.round_id);
        self.round_addr.do_send(Unregister { observer_id: self.observer_id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for RoundSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientWsMessage>(&text) {
                Ok(ClientWsMessage::Turn(heading)) => {
                    self.round_addr.do_send(RequestHeading { heading });
                }
                Ok(ClientWsMessage::Ping) => {}
                Err(e) => {
                    warn!("[RoundSocket] Invalid message on round {}: {}", self.round_id, e);
                    ctx.text(ws_error_message(
                        "INVALID_ACTION",
                        "Expected {\"action\":\"Turn\",\"data\":\"Up|Down|Left|Right\"}",
                        Some(&self.round_id.to_string()),
                    ));
                }
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[RoundSocket] Protocol error on round {}: {}", self.round_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for RoundSocket {
    type Result = ();

    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[RoundSocket] Failed to serialize update: {}", e);
                ctx.text(ws_error_message("INTERNAL", "Failed to serialize round update", None));
            }
        }
    }
}

/// Query parameters accepted when opening a round. Missing values fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct RoundParams {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub obstacles: Option<usize>,
    pub seed: Option<u64>,
}

impl RoundParams {
    pub fn to_config(&self) -> Result<ArenaConfig, ArenaError> {
        let defaults = ArenaConfig::default();
        let config = ArenaConfig {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            obstacle_count: self.obstacles.unwrap_or(defaults.obstacle_count),
        };
        config.validate()?;
        Ok(config)
    }
}

/// WebSocket endpoint: opens a fresh round and streams it to the client.
///
/// Optional query parameters: `width`, `height`, `obstacles`, `seed`.
/// The round is only created once the request is a valid WebSocket upgrade.
pub async fn ws_round(
    req: HttpRequest,
    stream: web::Payload,
    params: web::Query<RoundParams>,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    if let Err(e) = ws::handshake(&req) {
        warn!("[RoundSocket] Rejected non-WebSocket request: {}", e);
        return Err(e.into());
    }

    let config = match params.to_config() {
        Ok(config) => config,
        Err(e) => {
            return Ok(http_error_response("INVALID_CONFIG", &e.to_string(), None, StatusCode::BAD_REQUEST));
        }
    };

    let created = data.round_manager
        .send(CreateRound { config, seed: params.seed })
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    let (round_id, round_addr) = match created {
        Ok(round) => round,
        Err(e) => {
            return Ok(http_error_response("INVALID_CONFIG", &e.to_string(), None, StatusCode::BAD_REQUEST));
        }
    };

    ws::start(
        RoundSocket {
            round_id,
            observer_id: Uuid::new_v4(),
            round_addr,
        },
        &req,
        stream,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game::MAX_BOARD_SIDE;
    use crate::game::Heading;

    #[test]
    fn test_params_fall_back_to_defaults() {
        let config = RoundParams::default().to_config().unwrap();
        assert_eq!(config, ArenaConfig::default());

        let params = RoundParams { width: Some(12), obstacles: Some(0), ..Default::default() };
        let config = params.to_config().unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.obstacle_count, 0);
    }

    #[test]
    fn test_params_reject_huge_board() {
        let params = RoundParams { height: Some(MAX_BOARD_SIDE + 1), ..Default::default() };
        assert!(matches!(params.to_config(), Err(ArenaError::InvalidConfig { .. })));

        let params = RoundParams { width: Some(0), ..Default::default() };
        assert!(params.to_config().is_err());
    }

    #[test]
    fn test_client_message_format() {
        let msg: ClientWsMessage = serde_json::from_str(r#"{"action":"Turn","data":"Left"}"#).unwrap();
        assert_eq!(msg, ClientWsMessage::Turn(Heading::Left));
        assert!(serde_json::from_str::<ClientWsMessage>(r#"{"action":"Turn","data":"Sideways"}"#).is_err());
    }
}
