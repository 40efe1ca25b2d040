//! Category slug derivation.

/// Derive a category slug: lowercase, each whitespace run replaced by `-`.
///
/// Deterministic and idempotent: the output contains no whitespace and is
/// already lowercase, so slugging it again returns it unchanged.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    slug
}
