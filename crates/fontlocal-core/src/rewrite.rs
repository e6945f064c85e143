//! In-memory stylesheet rewriting.

/// Replaces every literal occurrence of `url` in `css` with `local_ref`.
///
/// Plain substring replacement over the whole buffer: if one extracted URL
/// is a prefix of another, the longer one is touched too. Returns the number
/// of occurrences replaced.
pub fn replace_literal(css: &mut String, url: &str, local_ref: &str) -> usize {
    if url.is_empty() {
        return 0;
    }
    let count = css.matches(url).count();
    if count > 0 {
        *css = css.replace(url, local_ref);
    }
    count
}
