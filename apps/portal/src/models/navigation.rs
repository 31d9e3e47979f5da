use serde::Serialize;

use crate::router::View;

/// A titled group of navigation items. Rebuilt from the role tables on every
/// navigation; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavSection {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
    pub icon: &'static str,
    pub badge: Option<u32>,
    /// True iff this item's view is the currently active one.
    pub active: bool,
}
