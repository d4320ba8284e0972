//! Backend origin resolution.

/// Base URL for all API calls. A `BACKEND_URL` compile-time override wins;
/// otherwise the app talks to the origin it was served from.
pub fn api_base_url() -> String {
    let origin = option_env!("BACKEND_URL")
        .map(str::to_string)
        .filter(|url| !url.is_empty())
        .or_else(|| {
            web_sys::window().and_then(|win| win.location().origin().ok())
        })
        .unwrap_or_default();
    format!("{}/api", origin.trim_end_matches('/'))
}
