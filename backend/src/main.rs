mod config;
mod services;
mod store;

use crate::config::AppConfig;
use crate::store::SqliteStore;
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Serves the built dashboard. Unknown paths get `index.html` so the
/// single-page app can handle them.
fn dashboard_files(static_dir: &Path) -> Files {
    let index = static_dir.join("index.html");
    Files::new("/", static_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();

    let store = match SqliteStore::open(&config.database) {
        Ok(store) => store,
        Err(e) => {
            error!("cannot open {}: {}", config.database.display(), e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    info!("Using database {}", config.database.display());

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("could not open a browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);

    let store = web::Data::new(store);
    let json_limit = config.json_limit;
    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(store.clone())
            .service(services::betting_sites::configure_routes())
            .service(services::user_submissions::configure_routes())
            .service(dashboard_files(&static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
