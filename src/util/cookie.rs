//! `document.cookie` parsing.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Return the percent-decoded value of the first cookie named `name` in a
/// `name=value; other=value` string.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned())
}
