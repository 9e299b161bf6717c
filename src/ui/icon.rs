use leptos::prelude::*;

/// Inline stroke icon; `name` is one of the [`icons`] constants
#[component]
pub fn Icon(
    /// Icon name
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=icon_path(name) />
        </svg>
    }
}

/// Predefined icon names
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BAR_CHART: &str = "bar-chart";
    pub const BRAIN: &str = "brain";
    pub const CALCULATOR: &str = "calculator";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const LIGHTNING: &str = "lightning";
    pub const MAIL: &str = "mail";
    pub const MAXIMIZE: &str = "maximize";
    pub const MENU: &str = "menu";
    pub const MESSAGE: &str = "message";
    pub const MINIMIZE: &str = "minimize";
    pub const PALETTE: &str = "palette";
    pub const PAUSE: &str = "pause";
    pub const PHONE: &str = "phone";
    pub const PLAY: &str = "play";
    pub const QUOTE: &str = "quote";
    pub const REFRESH: &str = "refresh";
    pub const SEND: &str = "send";
    pub const SHIELD: &str = "shield";
    pub const SPARKLES: &str = "sparkles";
    pub const SPINNER: &str = "spinner";
    pub const STAR: &str = "star";
    pub const TARGET: &str = "target";
    pub const USERS: &str = "users";
    pub const VOLUME: &str = "volume";
    pub const VOLUME_OFF: &str = "volume-off";
    pub const X: &str = "x";
}

/// Path data for an icon name; unknown names get the lightning bolt
fn icon_path(name: &str) -> &'static str {
    match name {
        icons::ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::ARROW_RIGHT => "M14 5l7 7m0 0l-7 7m7-7H3",
        icons::BAR_CHART => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
        icons::BRAIN => "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z",
        icons::CALCULATOR => "M9 7h6m0 10v-3m-3 3h.01M9 17h.01M9 14h.01M12 14h.01M15 11h.01M12 11h.01M9 11h.01M7 21h10a2 2 0 002-2V5a2 2 0 00-2-2H7a2 2 0 00-2 2v14a2 2 0 002 2z",
        icons::CHECK => "M5 13l4 4L19 7",
        icons::CHECK_CIRCLE => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::CHEVRON_DOWN => "M19 9l-7 7-7-7",
        icons::CHEVRON_LEFT => "M15 19l-7-7 7-7",
        icons::CHEVRON_RIGHT => "M9 5l7 7-7 7",
        icons::CLOCK => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::MAIL => "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
        icons::MAXIMIZE => "M4 8V4m0 0h4M4 4l5 5m11-1V4m0 0h-4m4 0l-5 5M4 16v4m0 0h4m-4 0l5-5m11 5l-5-5m5 5v-4m0 4h-4",
        icons::MENU => "M4 6h16M4 12h16M4 18h16",
        icons::MESSAGE => "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z",
        icons::MINIMIZE => "M9 9V4m0 5H4m0 0l5-5m6 5V4m0 5h5m0 0l-5-5M9 15v5m0-5H4m0 0l5 5m6-5v5m0-5h5m0 0l-5 5",
        icons::PALETTE => "M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zm0 0h12a2 2 0 002-2v-4a2 2 0 00-2-2h-2.343M11 7.343l1.657-1.657a2 2 0 012.828 0l2.829 2.829a2 2 0 010 2.828l-8.486 8.485M7 17h.01",
        icons::PAUSE => "M10 9v6m4-6v6m7-3a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::PHONE => "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z",
        icons::PLAY => "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664zM21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::QUOTE => "M7 8h4v4H8a1 1 0 00-1 1v3m6-8h4v4h-3a1 1 0 00-1 1v3",
        icons::REFRESH => "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15",
        icons::SEND => "M12 19l9 2-9-18-9 18 9-2zm0 0v-8",
        icons::SHIELD => "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
        icons::SPARKLES => "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z",
        icons::SPINNER => "M12 3a9 9 0 109 9",
        icons::STAR => "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z",
        icons::TARGET => "M12 21a9 9 0 100-18 9 9 0 000 18zm0-4a5 5 0 100-10 5 5 0 000 10zm0-4a1 1 0 100-2 1 1 0 000 2z",
        icons::USERS => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
        icons::VOLUME => "M15.536 8.464a5 5 0 010 7.072m2.828-9.9a9 9 0 010 12.728M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15z",
        icons::VOLUME_OFF => "M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15zM17 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2",
        icons::X => "M6 18L18 6M6 6l12 12",
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_icons_have_their_own_path() {
        let fallback = icon_path("no-such-icon");
        for name in [icons::CHECK, icons::X, icons::MENU, icons::STAR, icons::PLAY] {
            assert_ne!(icon_path(name), fallback, "{name}");
        }
        assert_eq!(icon_path(icons::LIGHTNING), fallback);
    }
}
