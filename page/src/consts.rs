//! Shared constants for the page crate.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the JSON-encoded theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on the root element that style rules key dark mode off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Navigation ──────────────────────────────────────────────────

/// Distance in pixels a section may still be below the fold and count as current.
pub const ACTIVE_LOOK_AHEAD_PX: f64 = 300.0;

/// Icon shown on the menu button while the disclosure is open.
pub const MENU_ICON_OPEN: &str = "fas fa-times";

/// Icon shown on the menu button while the disclosure is closed.
pub const MENU_ICON_CLOSED: &str = "fas fa-bars";

/// Rules for the active navigation link, injected once at startup.
pub const ACTIVE_NAV_CSS: &str = "\
.nav-links a.active {
    color: var(--primary-color) !important;
}
.nav-links a.active::after {
    width: 100% !important;
}
";

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset above which the back-to-top control is shown.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;

/// Hero translation per pixel scrolled.
pub const PARALLAX_FACTOR: f64 = 0.5;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Observer root margin; shrinks the trigger zone 100px from the bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Page fade-in duration after `load`.
pub const PAGE_FADE_MS: u32 = 500;

/// Vertical lift applied while hovering interactive elements.
pub const HOVER_LIFT_PX: f64 = 2.0;

// ── Cosmetic ────────────────────────────────────────────────────

/// Half the cursor follower's 20px diameter.
pub const CURSOR_RADIUS_PX: f64 = 10.0;

/// Load times above this are reported as slow.
pub const SLOW_LOAD_MS: f64 = 3000.0;

/// Quiet period before a resize burst is reported.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
