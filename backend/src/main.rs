mod config;
mod services;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use common::config::DashboardConfig;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;

use crate::config::{load_dashboard_config, ServerConfig};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend. Unknown paths get `index.html` so client
/// routes such as `/track-exam/{id}` survive a reload; unknown `/api` paths
/// are a plain 404.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        return HttpResponse::NotFound().body("Not Found");
    }
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

fn dashboard_config(server: &ServerConfig) -> DashboardConfig {
    let Some(path) = &server.dashboard_config else {
        return DashboardConfig::default();
    };
    match load_dashboard_config(path) {
        Ok(config) => {
            info!("Dashboard configuration loaded from {}", path.display());
            config
        }
        Err(err) => {
            warn!("{}; using default dashboard configuration", err);
            DashboardConfig::default()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server = ServerConfig::from_env().unwrap_or_else(|err| {
        error!("{}; using default server settings", err);
        ServerConfig::default()
    });
    let dashboard = web::Data::new(dashboard_config(&server));
    let url = server.url();

    if server.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, err);
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(dashboard.clone())
            .service(services::dashboard::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((server.host.as_str(), server.port))?
        .run()
        .await
}
