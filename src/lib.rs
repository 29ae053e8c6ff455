#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{CustomerReader, DieselRepository};

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod schema;
pub mod seed;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers the public routes on an actix-web app or scope.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::api::list_customers)
        .service(routes::api::health);
}

/// Wraps a customer source as shared application data for [`configure`].
#[cfg(feature = "server")]
pub fn customer_source<R>(repo: R) -> web::Data<dyn CustomerReader>
where
    R: CustomerReader + 'static,
{
    let repo: Arc<dyn CustomerReader> = Arc::new(repo);
    web::Data::from(repo)
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let customers = customer_source(DieselRepository::new(pool));

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving customers on http://{}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(customers.clone())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
