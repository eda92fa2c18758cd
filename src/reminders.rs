use chrono::{Local, NaiveDateTime};
use std::{env, sync::Arc};
use tracing::info;

/// Seam for the host's permission-gated notification capability.
pub trait Notifier: Send + Sync {
    fn permission_granted(&self) -> bool;
    fn notify(&self, message: &str);
}

/// Notifier backed by the process log. The grant is resolved once at
/// startup from `NOTIFICATIONS_GRANTED`, standing in for the browser
/// permission prompt.
pub struct LogNotifier {
    granted: bool,
}

impl LogNotifier {
    pub fn from_env() -> Self {
        let granted = env::var("NOTIFICATIONS_GRANTED")
            .map(|value| value != "false" && value != "0")
            .unwrap_or(true);
        info!("notifications {}", if granted { "granted" } else { "denied" });
        Self { granted }
    }
}

impl Notifier for LogNotifier {
    fn permission_granted(&self) -> bool {
        self.granted
    }

    fn notify(&self, message: &str) {
        info!("engagement reminder: {message}");
    }
}

/// Accepts the datetime-local form with or without seconds.
pub fn parse_target_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Schedules a one-shot reminder for `target` wall-clock time. A target at
/// or before now is a no-op returning `false` with nothing spawned. The
/// fired reminder notifies only when permission is granted; a denied grant
/// fires silently. No cancellation, no persistence across restarts.
pub fn schedule(notifier: Arc<dyn Notifier>, message: String, target: NaiveDateTime) -> bool {
    let delay = target - Local::now().naive_local();
    let Ok(delay) = delay.to_std() else {
        return false;
    };
    if delay.is_zero() {
        return false;
    }

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if notifier.permission_granted() {
            notifier.notify(&message);
        }
    });
    true
}
