#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::client::{QueryTransport, ZmqTransport};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::references::{
    index, list_defect_types, list_suppliers, list_tools, list_workplaces, root,
};

pub mod domain;
pub mod dto;
pub mod pagination;
pub mod queries;

#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let transport: Arc<dyn QueryTransport> = Arc::new(ZmqTransport::new(
        server_config.query_service_url.clone(),
        server_config.query_timeout(),
    ));
    let transport = web::Data::from(transport);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
    let tera = web::Data::new(tera);

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Dispatching queries to {} with a {} ms timeout",
        server_config.query_service_url,
        server_config.query_timeout_ms
    );

    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(root)
            .service(index)
            .service(list_tools)
            .service(list_suppliers)
            .service(list_defect_types)
            .service(list_workplaces)
            .app_data(tera.clone())
            .app_data(transport.clone())
            .app_data(server_config.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
