#[cfg(feature = "data")]
pub mod catalog;
#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "data")]
pub mod debounce;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "client")]
pub mod geo;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod pipeline;
#[cfg(feature = "data")]
pub mod query;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "data")]
pub mod source;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::models::config::ServerConfig;
    use crate::repository::InMemoryCatalog;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let catalog =
            InMemoryCatalog::from_paths(&server_config.tasks_path, &server_config.humans_path)
                .map_err(|e| std::io::Error::other(format!("Failed to load catalog: {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        let catalog = web::Data::new(catalog);
        let server_config = web::Data::new(server_config);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(web::scope("/api").configure(crate::routes::api::configure))
                .app_data(catalog.clone())
                .app_data(server_config.clone())
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
