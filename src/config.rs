use log::Level;

const GENERATION_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const FACT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Chatty console when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Injected at build time, e.g. `ECO_FACT_API_KEY=... trunk build --release`.
pub fn get_fact_api_key() -> &'static str {
    option_env!("ECO_FACT_API_KEY").unwrap_or("")
}

pub fn get_fact_endpoint() -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        GENERATION_API_BASE,
        FACT_MODEL,
        get_fact_api_key()
    )
}
