pub mod api;
pub mod auth;
pub mod cors;
pub mod exposed_representation_format;

use actix_web::{App, HttpServer};
use actix_web::middleware::Logger;
use actix_web::web::ServiceConfig;
use actix_web::web::scope as prefixed_service;
use anyhow::Context;
use log::info;
use crate::service::rest::api::{admin, status};
use crate::service::rest::cors::AllowedOrigin;

pub fn routes(config: &mut ServiceConfig) {
    config.service(prefixed_service("/api")
        .service(
            (
                prefixed_service("/auth")
                    .service(status::status),
                prefixed_service("/admin")
                    .service(admin::ping),
            )
        )
    );
}

pub async fn boot_http_server(
    port: u16,
    host: &str,
    proxied_by_cloudflare: bool,
    allowed_origins: Vec<AllowedOrigin>,
) -> Result<(), anyhow::Error> {
    for origin in &allowed_origins {
        info!("allowing cross-origin requests from {origin}");
    }

    let http_server = HttpServer::new(move || {
        let logger_format = if proxied_by_cloudflare {
            r#"%a (CF '%{CF-Connecting-IP}i') %t "%r" %s "%{Referer}i" "%{User-Agent}i" "#
        } else {
            r#"%a %t "%r" %s "%{Referer}i" "%{User-Agent}i" "#
        };

        App::new()
            .configure(routes)
            .wrap(Logger::new(logger_format))
            .wrap(cors::middleware_factory(&allowed_origins))
    });

    info!("listening on {host}:{port}");
    http_server
        .bind((host, port))?
        .run()
        .await
        .context("while running server")?;

    Ok(())
}
