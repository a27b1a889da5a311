use log::debug;

/// Rewrite alternate operator glyphs into their canonical ASCII forms
///
/// Trims and lower-cases the input, then maps `×`, `x`, and `X` to `*`,
/// `÷` to `/`, and the `**` spelling of exponentiation to `^`. Numeric
/// literals pass through untouched. The transform is pure, infallible, and
/// idempotent; anything it does not recognize is left for the parser to
/// reject.
pub fn normalize(raw: &str) -> String {
    debug!("Normalizing input: '{}'", raw);

    // Multiplication glyphs are folded before the `**` rewrite so that a
    // doubled glyph cannot reintroduce a `**` on a second pass.
    let canonical = raw
        .trim()
        .to_lowercase()
        .replace(['×', 'x'], "*")
        .replace('÷', "/")
        .replace("**", "^");

    debug!("Normalized to: '{}'", canonical);
    canonical
}
