//! Minimal scanning of injected markup: just enough to find a form.

/// Declared `action` of the first `<form>` in `html`.
///
/// Returns `Some("")` for a form without an `action` attribute and `None`
/// when there is no form at all.
pub(crate) fn form_action(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let start = find_tag(&lower, "form")?;
    let end = lower[start..].find('>').map_or(html.len(), |i| start + i);
    let tag = &html[start..end];
    Some(attribute(tag, "action").unwrap_or_default())
}

/// Whether `html` contains an element carrying `class` among its classes.
pub(crate) fn has_class(html: &str, class: &str) -> bool {
    let mut rest = html;
    while let Some(pos) = rest.find("class=") {
        rest = &rest[pos + "class=".len()..];
        if let Some(value) = quoted(rest) {
            if value.split_whitespace().any(|c| c == class) {
                return true;
            }
        }
    }
    false
}

fn find_tag(lower: &str, name: &str) -> Option<usize> {
    let needle = format!("<{name}");
    let mut offset = 0;
    while let Some(pos) = lower[offset..].find(&needle) {
        let at = offset + pos;
        let after = lower[at + needle.len()..].chars().next();
        if matches!(after, Some(c) if c.is_whitespace() || c == '>' || c == '/') {
            return Some(at);
        }
        offset = at + needle.len();
    }
    None
}

fn attribute(tag: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=");
    let pos = tag.to_ascii_lowercase().find(&needle)?;
    quoted(&tag[pos + needle.len()..]).map(str::to_string)
}

fn quoted(s: &str) -> Option<&str> {
    let quote = s.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let inner = &s[1..];
    inner.find(quote).map(|end| &inner[..end])
}
