use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::AppState;

/// Phases of a service process. There is no retry phase: a failed startup
/// connection leaves the service running with broken data routes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Starting,
    Running,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct Lifecycle(Arc<AtomicU8>);

impl Lifecycle {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU8::new(Phase::Starting as u8)))
    }

    pub fn phase(&self) -> Phase {
        match self.0.load(Ordering::Acquire) {
            0 => Phase::Starting,
            1 => Phase::Running,
            _ => Phase::Stopped,
        }
    }

    fn set(&self, phase: Phase) {
        self.0.store(phase as u8, Ordering::Release);
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Connects and migrates, then marks the service running.
///
/// Storage failures are logged and swallowed so the process still serves
/// liveness probes.
pub async fn startup(state: &AppState) {
    let kind = state.kind;
    let result = async {
        state.db.connect().await?;
        state.db.initialize_schema(kind).await
    }
    .await;

    match result {
        Ok(()) => info!(service = %kind, "database ready"),
        Err(err) => warn!(service = %kind, error = %err, "database unavailable, serving degraded"),
    }

    state.lifecycle.set(Phase::Running);
}

pub async fn shutdown(state: &AppState) {
    state.lifecycle.set(Phase::Stopped);
    if let Err(err) = state.db.disconnect().await {
        error!(service = %state.kind, error = %err, "failed to close database");
    }
    info!(service = %state.kind, "stopped");
}

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
