pub const PAGE: &str = "text-center font-sans";
pub const SECTION: &str = "my-5 px-4";
pub const HEADING: &str = "text-2xl font-bold mb-4";
pub const BODY_TEXT: &str = "text-base";
pub const CARD_GRID: &str = "grid grid-cols-1 sm:grid-cols-3 gap-5 justify-items-center";
pub const CARD: &str = "p-4 w-80 relative mt-1";
pub const CARD_IMAGE: &str = "w-full h-full mx-auto filter transition duration-200 group-hover:brightness-75";
pub const HOVER_COUNT: &str = "absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity text-white font-bold text-2xl";
pub const VOTE_BUTTON: &str = "mt-[-2rem] transform transition-transform duration-200 hover:scale-105 origin-center";
pub const OVERLAY: &str = "absolute inset-0 flex items-center justify-center pointer-events-none";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";
pub const MUTED: &str = "text-sm text-gray-400";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "warning" => combine_classes(ALERT_CARD, "bg-yellow-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}

/// Staggered fade-in used by the key visual.
pub fn fade_in_up(delay_ms: usize) -> String {
    format!("animation: fadeInUp 0.5s forwards; animation-delay: {}ms;", delay_ms)
}
