//! HTTP and WebSocket routing configuration.

use actix_web::{web, HttpResponse, Error};
use actix_web::http::StatusCode;
use uuid::Uuid;

use crate::server::round::messages::GetSnapshot;
use crate::server::round::server::GetRound;
use crate::server::round::session::ws_round;
use crate::server::state::AppState;
use crate::server::ws_error::http_error_response;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/round")
            .to(ws_round)
    )
    .service(
        web::resource("/rounds/{round_id}")
            .route(web::get().to(round_snapshot))
    );
}

/// Current snapshot of a running round as JSON.
pub async fn round_snapshot(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let raw_id = path.into_inner();
    let round_id = match Uuid::parse_str(&raw_id) {
        Ok(id) => id,
        Err(_) => {
            return Ok(http_error_response("INVALID_ROUND_ID", "Round id is not a UUID", Some(&raw_id), StatusCode::BAD_REQUEST));
        }
    };

    let round = data.round_manager
        .send(GetRound { round_id })
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;
    let round = match round {
        Ok(addr) => addr,
        Err(message) => {
            return Ok(http_error_response("ROUND_NOT_FOUND", &message, Some(&raw_id), StatusCode::NOT_FOUND));
        }
    };

    let snapshot = round
        .send(GetSnapshot)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix::Actor;
    use actix_web::{test, App};

    use crate::game::{ArenaConfig, Snapshot};
    use crate::server::round::server::{CountRounds, CreateRound, RoundManager};

    #[actix_web::test]
    async fn test_snapshot_route() {
        let manager = RoundManager::new().start();
        let (round_id, _session) = manager
            .send(CreateRound { config: ArenaConfig::default(), seed: Some(3) })
            .await
            .unwrap()
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(manager)))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri(&format!("/rounds/{}", round_id)).to_request();
        let snapshot: Snapshot = test::call_and_read_body_json(&app, req).await;
        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.body.len(), 1);

        let req = test::TestRequest::get().uri(&format!("/rounds/{}", Uuid::new_v4())).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/rounds/not-a-uuid").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_plain_get_on_ws_route_creates_no_round() {
        let manager = RoundManager::new().start();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(manager.clone())))
                .configure(config),
        )
        .await;

        for _ in 0..3 {
            let req = test::TestRequest::get().uri("/ws/round?width=10&height=10").to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_client_error());
        }

        assert_eq!(manager.send(CountRounds).await.unwrap(), 0);
    }
}
