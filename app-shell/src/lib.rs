use serde::{Deserialize, Serialize};

/// Viewport widths below this count as mobile (logical px).
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Visual theme. Cycles in a fixed order via [`Theme::next`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Rainy,
}

impl Theme {
    /// Next theme in the fixed Light -> Dark -> Rainy -> Light cycle.
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Rainy,
            Theme::Rainy => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
            Theme::Rainy => "Rainy Mode",
        }
    }
}

/// Rendered sidebar mode, derived from the shell state on demand.
/// CollapsedRail exists only on desktop; Hidden only on mobile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Open,
    CollapsedRail,
    Hidden,
}

/// Navigable pages. Static configuration, never mutated at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavRoute {
    Home,
    User,
    Upload,
    Settings,
}

impl NavRoute {
    pub const ALL: [NavRoute; 4] = [
        NavRoute::Home,
        NavRoute::User,
        NavRoute::Upload,
        NavRoute::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavRoute::Home => "/home",
            NavRoute::User => "/user",
            NavRoute::Upload => "/upload",
            NavRoute::Settings => "/settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavRoute::Home => "Home",
            NavRoute::User => "User",
            NavRoute::Upload => "Upload",
            NavRoute::Settings => "Settings",
        }
    }

    /// Resolve a location pathname. Unknown paths yield `None`; the router
    /// redirects those to `/home`.
    pub fn from_path(path: &str) -> Option<NavRoute> {
        let trimmed = path.trim_end_matches('/');
        NavRoute::ALL.iter().copied().find(|r| r.path() == trimmed)
    }
}

/// Global shell state: one owned instance for the UI session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub is_mobile: bool,
    pub theme: Theme,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            is_mobile: false,
            theme: Theme::Dark,
        }
    }
}

impl ShellState {
    /// Flip the sidebar. Valid from any state, no guards.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Advance the theme. Leaves the sidebar fields untouched.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Record the viewport class. Entering mobile forces the sidebar closed;
    /// leaving mobile does NOT restore it (matches the shipped behavior).
    pub fn set_mobile(&mut self, is_mobile: bool) {
        if is_mobile && !self.is_mobile {
            self.sidebar_open = false;
        }
        self.is_mobile = is_mobile;
    }

    /// Derived sidebar mode. Computed on every call so the stored booleans
    /// stay the single source of truth.
    pub fn sidebar_mode(&self) -> SidebarMode {
        match (self.sidebar_open, self.is_mobile) {
            (true, _) => SidebarMode::Open,
            (false, false) => SidebarMode::CollapsedRail,
            (false, true) => SidebarMode::Hidden,
        }
    }

    /// CSS class for the main content column; maps the sidebar mode to the
    /// matching margin. On mobile the open sidebar overlays, so no margin.
    pub fn main_class(&self) -> &'static str {
        match self.sidebar_mode() {
            SidebarMode::Open if !self.is_mobile => "main-content offset-wide",
            SidebarMode::CollapsedRail => "main-content offset-rail",
            _ => "main-content",
        }
    }
}

/// Pure viewport classification shared by the monitor and tests.
pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_parity() {
        let mut state = ShellState::default();
        for theme in [Theme::Light, Theme::Dark, Theme::Rainy] {
            state.theme = theme;
            for i in 1..=6 {
                state.toggle_sidebar();
                assert_eq!(state.sidebar_open, i % 2 == 0);
            }
        }
    }

    #[test]
    fn theme_cycle_order() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Rainy);
        assert_eq!(Theme::Rainy.next(), Theme::Light);

        let mut state = ShellState::default();
        let before = state.clone();
        state.cycle_theme();
        state.cycle_theme();
        state.cycle_theme();
        assert_eq!(state, before);
    }

    #[test]
    fn theme_cycle_leaves_sidebar_alone() {
        let mut state = ShellState {
            sidebar_open: false,
            is_mobile: true,
            theme: Theme::Light,
        };
        state.cycle_theme();
        assert!(!state.sidebar_open);
        assert!(state.is_mobile);
    }

    #[test]
    fn entering_mobile_forces_sidebar_closed() {
        let mut state = ShellState::default();
        assert!(state.sidebar_open);
        state.set_mobile(true);
        assert!(!state.sidebar_open);

        // Leaving mobile must not restore it.
        state.set_mobile(false);
        assert!(!state.sidebar_open);

        // Repeated mobile reports are idempotent: only the false->true edge
        // forces the close.
        state.set_mobile(true);
        state.sidebar_open = true;
        state.set_mobile(true);
        assert!(state.sidebar_open);
    }

    #[test]
    fn sidebar_mode_table() {
        let mode = |open, mobile| {
            ShellState {
                sidebar_open: open,
                is_mobile: mobile,
                theme: Theme::Dark,
            }
            .sidebar_mode()
        };
        assert_eq!(mode(true, false), SidebarMode::Open);
        assert_eq!(mode(false, false), SidebarMode::CollapsedRail);
        assert_eq!(mode(true, true), SidebarMode::Open);
        assert_eq!(mode(false, true), SidebarMode::Hidden);
    }

    #[test]
    fn resize_scenario() {
        // Mount at 1024 (desktop), shrink to 500, grow back, then toggle.
        let mut state = ShellState::default();
        state.set_mobile(is_mobile_width(1024.0));
        assert_eq!(state.sidebar_mode(), SidebarMode::Open);

        state.set_mobile(is_mobile_width(500.0));
        assert!(!state.sidebar_open);
        assert_eq!(state.sidebar_mode(), SidebarMode::Hidden);

        state.set_mobile(is_mobile_width(1024.0));
        assert_eq!(state.sidebar_mode(), SidebarMode::CollapsedRail);

        state.toggle_sidebar();
        assert_eq!(state.sidebar_mode(), SidebarMode::Open);
    }

    #[test]
    fn breakpoint_boundary() {
        assert!(is_mobile_width(767.0));
        assert!(!is_mobile_width(768.0));
        assert!(!is_mobile_width(1024.0));
    }

    #[test]
    fn route_resolution() {
        assert_eq!(NavRoute::from_path("/home"), Some(NavRoute::Home));
        assert_eq!(NavRoute::from_path("/settings/"), Some(NavRoute::Settings));
        assert_eq!(NavRoute::from_path("/nonexistent"), None);
        assert_eq!(NavRoute::from_path(""), None);
    }

    #[test]
    fn main_class_mapping() {
        let class = |open, mobile| {
            ShellState {
                sidebar_open: open,
                is_mobile: mobile,
                theme: Theme::Dark,
            }
            .main_class()
        };
        assert_eq!(class(true, false), "main-content offset-wide");
        assert_eq!(class(false, false), "main-content offset-rail");
        assert_eq!(class(true, true), "main-content");
        assert_eq!(class(false, true), "main-content");
    }

    #[test]
    fn state_roundtrip() {
        let state = ShellState {
            sidebar_open: false,
            is_mobile: true,
            theme: Theme::Rainy,
        };
        let json = serde_json::to_string(&state).unwrap();
        let decoded: ShellState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
    }
}
