use crate::models::AppData;
use crate::reminders::Notifier;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, data: AppData, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            data_dir,
            data: Arc::new(Mutex::new(data)),
            notifier,
        }
    }
}
