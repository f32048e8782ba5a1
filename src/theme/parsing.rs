//! Small value parsers shared by the settings loader.

/// What: Strip a trailing inline comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text following `=`.
///
/// Output:
/// - Value without `// ...` or `# ...` suffix, trimmed.
///
/// Details:
/// - A value that starts with `#` keeps its first `#` (e.g. a hex colour); only
///   a later `#` starts the comment.
/// - URLs keep their `//` after a scheme (`http://`, `https://`).
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    let mut search_from = 0;
    while let Some(rel) = s[search_from..].find("//") {
        let i = search_from + rel;
        if i > 0 && s[..i].ends_with(':') {
            search_from = i + 2;
            continue;
        }
        s = &s[..i];
        break;
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// Interpret common truthy spellings (`true`, `1`, `yes`, `on`).
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}
