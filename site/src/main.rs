use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::path::PathBuf;

mod config;

use config::ServerConfig;

async fn spa(index: web::Data<PathBuf>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(index.get_ref())?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = ServerConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        cfg.dist.display(),
        cfg.assets.display(),
        cfg.host,
        cfg.port
    );

    let index = web::Data::new(cfg.index_html());
    let dist = cfg.dist.clone();
    let assets = cfg.assets.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(index.clone())
            // ① top-level static assets (images, fonts, css)
            .service(Files::new("/assets", assets.clone()))
            // ② the SPA bundle built by trunk
            .service(Files::new("/", dist.clone()).index_file("index.html"))
            // ③ anything else -> SPA
            .default_service(web::get().to(spa))
    })
    .bind((cfg.host.as_str(), cfg.port))
    .with_context(|| format!("binding {}:{}", cfg.host, cfg.port))?
    .run()
    .await
    .context("http server")
}
