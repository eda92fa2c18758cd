use crate::errors::AppError;
use crate::models::{AppData, Engagement, Profile};
use serde::{de::DeserializeOwned, Serialize};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const PROFILES_FILE: &str = "profiles.json";
pub const ENGAGEMENTS_FILE: &str = "engagements.json";
pub const TEMPLATES_FILE: &str = "templates.json";

pub fn resolve_data_dir() -> Result<PathBuf, std::io::Error> {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    Ok(PathBuf::from("data"))
}

/// Reads one collection file, falling back to an empty collection when the
/// file is missing or unreadable. A parse failure is logged, not fatal.
async fn load_collection<T>(dir: &Path, file: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    let path = dir.join(file);
    match fs::read(&path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(err) => {
                error!("failed to parse {file}: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read {file}: {err}");
            Vec::new()
        }
    }
}

pub async fn load_data(dir: &Path) -> AppData {
    AppData {
        profiles: load_collection::<Profile>(dir, PROFILES_FILE).await,
        engagements: load_collection::<Engagement>(dir, ENGAGEMENTS_FILE).await,
        templates: load_collection::<String>(dir, TEMPLATES_FILE).await,
    }
}

/// Writes one collection whole. Each mutation rewrites only the file for
/// the collection it touched.
pub async fn persist_collection<T>(dir: &Path, file: &str, items: &[T]) -> Result<(), AppError>
where
    T: Serialize,
{
    let payload = serde_json::to_vec_pretty(items).map_err(AppError::internal)?;
    fs::write(dir.join(file), payload).await.map_err(AppError::internal)?;
    Ok(())
}
