mod auth;
mod chat;
mod composer;
mod config;
mod errors;
mod loader;
mod models;
mod render;
mod router;
mod session;
mod store;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::{demo_account, Authenticator, SignInRequest};
use crate::chat::ChatSession;
use crate::config::Config;
use crate::errors::AppError;
use crate::loader::ContentLoader;
use crate::models::identity::Role;
use crate::render::{PlainTextRenderer, Renderer};
use crate::router::{resolve_navigation, View};
use crate::session::SessionContext;
use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting placement portal shell v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn KeyValueStore> = match &config.state_path {
        Some(path) => {
            info!("Persisting shell state to {}", path.display());
            Arc::new(JsonFileStore::open(path))
        }
        None => {
            info!("PORTAL_STATE_PATH not set, shell state is in-memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let mut session = SessionContext::new(store);
    session.restore().await?;
    if config.reset {
        session.clear().await?;
        info!("Cleared the stored session (PORTAL_RESET)");
    }
    info!("Theme preference: {}", session.theme().as_str());

    let authenticator = Authenticator::new(Duration::from_millis(config.login_delay_ms));

    if session.identity().is_none() {
        sign_in_demo_student(&authenticator, &mut session).await?;
    }

    let Some(identity) = session.identity().cloned() else {
        anyhow::bail!("sign-in did not produce a session");
    };
    info!("Signed in as {} ({})", identity.name, identity.role);
    if !identity.role.is_known() {
        warn!(
            "Role '{}' is not recognized by this build; navigation will be limited",
            identity.role
        );
    }

    let renderer = PlainTextRenderer;
    let mut loader = ContentLoader::new(Duration::from_millis(config.load_delay_ms));

    // Walk a few pages the way a user would: the dashboard, a role page, and
    // an id the router does not know (which lands on the placeholder).
    for view in [View::Dashboard, View::Jobs, View::parse("placements")] {
        session.navigate(view.clone());
        let handle = loader.begin(&identity.role, view);
        let content = handle.resolve().await?;
        renderer.render_navigation(&resolve_navigation(&identity.role, session.view().active()));
        renderer.render_page(&identity, session.view().breadcrumb(), &content);
    }

    // Navigate again before the previous load settles; the superseded load
    // reports itself cancelled and its result is dropped.
    let stale = loader.begin(&identity.role, View::Interviews);
    session.navigate(View::Profile);
    let fresh = loader.begin(&identity.role, View::Profile);
    match stale.resolve().await {
        Err(AppError::Cancelled) => info!("Discarded a stale content load"),
        Ok(_) => warn!("Stale load completed before it could be superseded"),
        Err(err) => return Err(err.into()),
    }
    let content = fresh.resolve().await?;
    renderer.render_page(&identity, session.view().breadcrumb(), &content);

    // One exchange with the assistant.
    let mut assistant = ChatSession::new();
    assistant.send("I need help with my resume").await;
    renderer.render_chat(assistant.messages());

    let theme = session.toggle_theme().await?;
    info!("Theme toggled to {}; it will stick on the next run", theme.as_str());

    info!("Session snapshot retained for the next run");
    Ok(())
}

async fn sign_in_demo_student(
    authenticator: &Authenticator,
    session: &mut SessionContext,
) -> Result<()> {
    let Some(account) = demo_account(&Role::Student) else {
        anyhow::bail!("no demo account for the student role");
    };
    info!(
        "No stored session; demo accounts exist for: {}",
        Role::KNOWN
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!("Signing in as {} ({})", account.name, account.email);
    let identity = authenticator
        .sign_in(&SignInRequest {
            email: account.email.to_string(),
            password: account.password.to_string(),
            role: Role::Student,
        })
        .await?;
    session.set_identity(identity).await?;
    Ok(())
}
