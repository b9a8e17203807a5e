/// Strips exactly one trailing `/` from a base URL.
///
/// `http://host:8000/` becomes `http://host:8000`; anything without a trailing
/// slash is returned unchanged. Paths are always appended with a leading `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}
