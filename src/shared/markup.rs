// src/shared/markup.rs
//! Small helpers shared by every view renderer.

/// Escapes text for HTML element content and double-quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Upper-cases the first character: `"web development"` -> `"Web development"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `true` for `http://`, `https://` and protocol-relative `//` URLs.
pub fn is_absolute_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

/// Prefixes a relative media path with `base_url`, joined by exactly one `/`.
pub fn absolutize(base_url: &str, src: &str) -> String {
    if is_absolute_url(src) {
        return src.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        src.trim_start_matches('/')
    )
}
