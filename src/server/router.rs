//! HTTP and WebSocket routing configuration.
//!
//! `/` serves the display page, `/ws` upgrades to a display session.

use actix_web::{web, HttpResponse};

use crate::config::server::WS_ROUTE;
use crate::server::session::ws_display;

const INDEX_HTML: &str = include_str!("../../static/index.html");

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
    )
    .service(
        web::resource(WS_ROUTE)
            .to(ws_display)
    );
}
