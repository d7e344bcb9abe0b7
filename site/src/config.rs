use anyhow::{Context, Result};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Where the static bundle is served from and which address to bind.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dist: PathBuf,   // trunk output with index.html
    pub assets: PathBuf, // images, fonts, css
}

impl ServerConfig {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("loaded env file {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e).context("reading .env"),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let host = lookup("SITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SITE_PORT is not a port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let dist = lookup("SITE_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../dist"));
        let assets = lookup("SITE_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../assets"));

        Ok(Self { host, port, dist, assets })
    }

    pub fn index_html(&self) -> PathBuf {
        self.dist.join("index.html")
    }
}
