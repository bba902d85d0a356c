use super::*;
use crate::dto::ApiError;
use crate::dto::ApiRound;
use crate::dto::ApiSession;
use crate::dto::PlayRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn play(table: web::Data<Table>, body: web::Json<PlayRequest>) -> impl Responder {
    let body = body.into_inner();
    match body
        .player()
        .and_then(|player| body.session().map(|id| (player, id)))
    {
        Ok((player, id)) => {
            let (round, tally) = table.play(&id, player, body.last()).await;
            log::info!("session {}: {}", id, round);
            HttpResponse::Ok().json(ApiRound::from((round, tally)))
        }
        Err(e) => {
            log::warn!("rejected play: {}", e);
            HttpResponse::BadRequest().json(ApiError::from(e))
        }
    }
}

pub async fn session(table: web::Data<Table>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match table.session(&id).await {
        Ok(state) => HttpResponse::Ok().json(ApiSession::from((id, &state))),
        Err(e) => HttpResponse::NotFound().json(ApiError::from(e)),
    }
}
