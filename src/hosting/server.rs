use super::*;
use crate::dto::ApiError;
use crate::strategy::Selector;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::error::InternalError;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let table = web::Data::new(Table::new(Selector::from(config.policy()?)));
        let address = config.address();
        log::info!("starting hosting server on {}", address);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .app_data(table.clone())
                .configure(routes)
        })
        .workers(config.workers())
        .bind(address.as_str())?
        .run()
        .await?;
        Ok(())
    }
}

/// Route table, shared by the server and its tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json())
        .route("/play", web::post().to(handlers::play))
        .route("/session/{id}", web::get().to(handlers::session));
}

/// Malformed bodies get the same JSON error shape as invalid moves.
fn json() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| {
        log::warn!("rejected body: {}", err);
        let response = HttpResponse::BadRequest().json(ApiError::new(&err));
        InternalError::from_response(err, response).into()
    })
}
