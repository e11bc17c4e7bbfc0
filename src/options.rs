//! Configuration options for fetching and extraction.
//!
//! All HTTP behavior lives here instead of in hidden static client state;
//! an `Options` instance is constructed once at the composition root and
//! passed by reference to the functions that need it.

/// Default request timeout, applied to both page fetches and image probes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Browser-impersonating User-Agent sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36 Edg/112.0.1722.34";

/// Favicon service template; `{host}` is replaced by the request host.
pub const DEFAULT_FAVICON_SERVICE: &str = "http://www.google.com/s2/favicons?domain={host}&sz=64";

/// Configuration options for metadata extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_linkpreview::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     timeout_secs: 5,
///     validate_images: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Per-request timeout in seconds. One constant for the whole pipeline;
    /// a slow remote can delay extraction by at most this much per candidate.
    ///
    /// Default: `10`
    pub timeout_secs: u64,

    /// User-Agent header value for all outbound requests.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Send a `Referer` header carrying the request's own host.
    ///
    /// Default: `true`
    pub send_referer: bool,

    /// Prefer `name=` meta attributes over `property=` when both carry a
    /// candidate key. The default order is `property=` first; sites that
    /// duplicate keys across both kinds rarely agree, so the precedence is
    /// policy rather than fixed law.
    ///
    /// Default: `false`
    pub prefer_name_attr: bool,

    /// Confirm thumbnail candidates over the network (content type plus
    /// magic bytes). When disabled, candidates that pass the extension gate
    /// are accepted as-is; useful for offline callers and tests.
    ///
    /// Default: `true`
    pub validate_images: bool,

    /// Favicon service URL template with a `{host}` placeholder, used when
    /// the page declares no icon of its own. `None` disables the fallback.
    ///
    /// Default: [`DEFAULT_FAVICON_SERVICE`]
    pub favicon_service: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            send_referer: true,
            prefer_name_attr: false,
            validate_images: true,
            favicon_service: Some(DEFAULT_FAVICON_SERVICE.to_string()),
        }
    }
}
