//! Simulated page-content loading with deterministic stale-result discard.
//! Each navigation starts a new load and cancels the in-flight one; a
//! superseded load resolves to `Cancelled` instead of racing the winner for
//! the content area.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::errors::AppError;
use crate::models::identity::Role;
use crate::router::{self, PageContent, View};

pub struct ContentLoader {
    delay: Duration,
    current: Option<CancellationToken>,
}

impl ContentLoader {
    pub fn new(delay: Duration) -> Self {
        ContentLoader {
            delay,
            current: None,
        }
    }

    /// Starts loading `view` for `role`, superseding any in-flight load.
    pub fn begin(&mut self, role: &Role, view: View) -> LoadHandle {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.current = Some(token.clone());
        debug!("Loading content for view '{}'", view.id());
        LoadHandle {
            role: role.clone(),
            view,
            token,
            delay: self.delay,
        }
    }
}

pub struct LoadHandle {
    role: Role,
    view: View,
    token: CancellationToken,
    delay: Duration,
}

impl LoadHandle {
    /// Waits out the simulated latency and resolves the page content, or
    /// reports `Cancelled` if a later navigation superseded this load.
    pub async fn resolve(self) -> Result<PageContent, AppError> {
        tokio::select! {
            _ = self.token.cancelled() => Err(AppError::Cancelled),
            _ = tokio::time::sleep(self.delay) => {
                Ok(router::resolve_content(&self.role, &self.view))
            }
        }
    }
}
