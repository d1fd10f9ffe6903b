use std::path::Path;

use anyhow::Context;
use dcc_config::DccConfig;
use dcc_db::service::DccService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: DccService,
    pub config: DccConfig,
}

impl AppContext {
    /// Open the configured data source.
    ///
    /// A local database file gets its parent directory created first so the
    /// development schema can be laid down on first run.
    pub async fn init(config: DccConfig) -> anyhow::Result<Self> {
        if !config.database.is_remote() {
            ensure_parent_dir(&config.database.path)?;
        }

        let service = DccService::from_config(&config.database)
            .await
            .with_context(|| {
                if config.database.is_remote() {
                    format!("failed to connect to remote database {}", config.database.url)
                } else {
                    format!("failed to open database {}", config.database.path)
                }
            })?;

        tracing::debug!(remote = config.database.is_remote(), "application context ready");
        Ok(Self { service, config })
    }
}

fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    if db_path == ":memory:" {
        return Ok(());
    }
    match Path::new(db_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display())),
        _ => Ok(()),
    }
}
