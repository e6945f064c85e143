//! Filename sanitization for downloaded fonts.

/// Replaces NUL, `/`, `\` and control characters with `_`.
///
/// Everything else is kept verbatim (including `?`, `=` and repeated
/// underscores) so the file name mirrors the URL segment. Length is capped at
/// 255 bytes (Linux NAME_MAX).
pub fn sanitize_file_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let out: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if out.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !out.is_char_boundary(take) {
            take -= 1;
        }
        out[..take].to_string()
    } else {
        out
    }
}
