use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;

/// Process-level settings for the search server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub titles_path: PathBuf,
    pub corpus_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            titles_path: PathBuf::from("./titles.txt"),
            corpus_path: PathBuf::from("./completeworks.txt"),
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl ServerConfig {
    /// Reads `PORT`, `TITLES_PATH`, `CORPUS_PATH` and `STATIC_DIR`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            config.port = port
                .parse()
                .with_context(|| format!("invalid PORT value: {}", port))?;
        }
        if let Some(path) = lookup("TITLES_PATH") {
            config.titles_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("CORPUS_PATH") {
            config.corpus_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Applies command-line overrides (`--port <n>`). Unknown flags are skipped.
    pub fn with_args(mut self, args: &[String]) -> anyhow::Result<Self> {
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--port" => {
                    let value = args.get(i + 1).context("--port requires a value")?;
                    self.port = value
                        .parse()
                        .with_context(|| format!("invalid --port value: {}", value))?;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
