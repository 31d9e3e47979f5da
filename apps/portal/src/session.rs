use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::identity::Identity;
use crate::router::{View, ViewState};
use crate::store::{KeyValueStore, SESSION_KEY, THEME_KEY};

/// Light/dark preference, persisted as its lowercase tag. Anything
/// unreadable falls back to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(tag: &str) -> Option<Theme> {
        match tag {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Owns the mutable session data: who is signed in, which view is active,
/// and the theme preference. Everything else in the shell only reads from
/// it. Passed explicitly to whoever needs it; there is no ambient global.
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    identity: Option<Identity>,
    view: ViewState,
    theme: Theme,
}

impl SessionContext {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        SessionContext {
            store,
            identity: None,
            view: ViewState::new(),
            theme: Theme::Light,
        }
    }

    /// Rehydrates identity and theme from the store. A missing or unreadable
    /// snapshot means "signed out", never a startup failure; unreadable
    /// snapshots are also erased so they cannot keep tripping future runs.
    pub async fn restore(&mut self) -> Result<(), AppError> {
        if let Some(raw) = self.store.get(SESSION_KEY).await? {
            match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    info!("Restored session for {}", identity.email);
                    self.identity = Some(identity);
                }
                Err(err) => {
                    warn!("Stored session snapshot is unreadable, treating as signed out: {err}");
                    self.store.remove(SESSION_KEY).await?;
                }
            }
        }
        if let Some(tag) = self.store.get(THEME_KEY).await? {
            self.theme = Theme::parse(&tag).unwrap_or_default();
        }
        Ok(())
    }

    /// Installs a signed-in identity, snapshots it to the store, and enters
    /// the dashboard. The role is taken as-is; unrecognized tags degrade at
    /// navigation time instead of being rejected here.
    pub async fn set_identity(&mut self, identity: Identity) -> Result<(), AppError> {
        let snapshot =
            serde_json::to_string(&identity).map_err(|e| AppError::Store(e.to_string()))?;
        self.store.set(SESSION_KEY, &snapshot).await?;
        self.identity = Some(identity);
        self.view = ViewState::new();
        Ok(())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Signs out: drops the identity, erases the snapshot, resets navigation.
    pub async fn clear(&mut self) -> Result<(), AppError> {
        self.store.remove(SESSION_KEY).await?;
        self.identity = None;
        self.view = ViewState::new();
        Ok(())
    }

    pub fn navigate(&mut self, view: View) {
        self.view.navigate(view);
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str()).await?;
        Ok(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identity::Role;
    use crate::store::MemoryStore;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_identity(role: Role) -> Identity {
        let now = Utc::now();
        Identity {
            id: Uuid::new_v4(),
            name: "Alex Johnson".to_string(),
            email: "student@demo.com".to_string(),
            role,
            avatar: None,
            joined_at: now,
            last_login: now,
        }
    }

    fn make_session() -> (SessionContext, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SessionContext::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_set_identity_snapshots_and_round_trips() {
        let (mut session, store) = make_session();
        let identity = make_identity(Role::Student);
        session.set_identity(identity.clone()).await.unwrap();

        let raw = store.get(SESSION_KEY).await.unwrap().unwrap();
        let restored: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, identity);
    }

    #[tokio::test]
    async fn test_restore_rehydrates_a_stored_identity() {
        let store = Arc::new(MemoryStore::new());
        let identity = make_identity(Role::Mentor);
        {
            let mut first = SessionContext::new(store.clone());
            first.set_identity(identity.clone()).await.unwrap();
        }

        let mut second = SessionContext::new(store);
        second.restore().await.unwrap();
        assert_eq!(second.identity(), Some(&identity));
    }

    #[tokio::test]
    async fn test_restore_with_empty_store_is_signed_out() {
        let (mut session, _) = make_session();
        session.restore().await.unwrap();
        assert!(session.identity().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_treated_as_signed_out() {
        let (mut session, store) = make_session();
        store.set(SESSION_KEY, "{not an identity").await.unwrap();

        session.restore().await.unwrap();
        assert!(session.identity().is_none());
        // The bad snapshot is erased, not left to fail again next run.
        assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_erases_the_snapshot_and_resets_navigation() {
        let (mut session, store) = make_session();
        session.set_identity(make_identity(Role::Admin)).await.unwrap();
        session.navigate(View::Users);

        session.clear().await.unwrap();
        assert!(session.identity().is_none());
        assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);
        assert_eq!(*session.view().active(), View::Dashboard);
    }

    #[tokio::test]
    async fn test_sign_in_enters_the_dashboard() {
        let (mut session, _) = make_session();
        session.navigate(View::Jobs);
        session.set_identity(make_identity(Role::Student)).await.unwrap();
        assert_eq!(*session.view().active(), View::Dashboard);
        assert_eq!(session.view().breadcrumb(), "Dashboard");
    }

    #[tokio::test]
    async fn test_theme_round_trips_through_the_store() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut session = SessionContext::new(store.clone());
            assert_eq!(session.toggle_theme().await.unwrap(), Theme::Dark);
        }

        let mut restored = SessionContext::new(store);
        restored.restore().await.unwrap();
        assert_eq!(restored.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_unknown_theme_tag_defaults_to_light() {
        let (mut session, store) = make_session();
        store.set(THEME_KEY, "solarized").await.unwrap();
        session.restore().await.unwrap();
        assert_eq!(session.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn test_unrecognized_role_survives_the_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let identity = make_identity(Role::Other("alumni".to_string()));
        {
            let mut first = SessionContext::new(store.clone());
            first.set_identity(identity).await.unwrap();
        }

        let mut second = SessionContext::new(store);
        second.restore().await.unwrap();
        let role = &second.identity().unwrap().role;
        assert_eq!(*role, Role::Other("alumni".to_string()));
    }
}
