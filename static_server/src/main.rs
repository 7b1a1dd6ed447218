mod config;
mod tls;

use std::path::Path;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Context;
use env_logger::Env;
use log::info;

use crate::config::ServerConfig;

/* ---------- static files + fallback SPA (index.html) -------------------- */

/// Serves the bundle; client-side routes (/operators, /vans…) have no file
/// on disk and get `index.html`.
fn bundle(dist: &Path) -> Files {
    let index = dist.join("index.html");

    Files::new("/", dist)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}

/* ---------- main -------------------------------------------------------- */

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info,actix_web=info")).init();

    let cfg = ServerConfig::from_env()?;
    info!("serving static files from {}", cfg.dist_dir.display());

    let dist = cfg.dist_dir.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(bundle(&dist))
    });

    let addr = (cfg.bind.as_str(), cfg.port);
    let server = match &cfg.tls {
        Some(files) => {
            let tls_cfg = tls::rustls_config(files).context("TLS config")?;
            info!("listening on https://{}:{}", cfg.bind, cfg.port);
            server.bind_rustls_0_23(addr, tls_cfg)?
        }
        None => {
            info!("listening on http://{}:{}", cfg.bind, cfg.port);
            server.bind(addr)?
        }
    };

    server.run().await?;
    Ok(())
}
