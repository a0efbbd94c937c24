//! Shared UI constants such as colors, sizing, and scripts.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_LIVE: &str = "#ef4444";
pub const ACCENT_COMMITTED: &str = "#f97316";
pub const ACCENT_WINDOW: &str = "#3b82f6";
pub const PROJECTION_FILL: &str = "rgba(59, 130, 246, 0.12)";
pub const PROJECTION_STROKE: &str = "rgba(59, 130, 246, 0.45)";

pub const HEADER_HEIGHT: f64 = 96.0;
pub const STATUS_BAR_HEIGHT: f64 = 22.0;
pub const SLIDER_HEIGHT: f64 = 44.0;
pub const EVENT_PANEL_WIDTH: f64 = 280.0;
/// Vertical padding above and below the rails inside the calendar.
pub const CALENDAR_PADDING_PX: f64 = 16.0;

pub const FONT_MONO: &str = "'SF Mono', Consolas, monospace";

/// Reports the calendar host's client height whenever it changes.
pub const CALENDAR_HEIGHT_SCRIPT: &str = r#"
const hostId = "calendar-host";
let lastHeight = null;

function sendHeight() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const height = host.clientHeight || 0;
    if (lastHeight !== null && Math.abs(lastHeight - height) < 0.5) {
        return;
    }
    lastHeight = height;
    dioxus.send(height);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendHeight());
    observer.observe(host);
    window.addEventListener("resize", sendHeight, { passive: true });
    sendHeight();
}

attach();
await new Promise(() => {});
"#;
