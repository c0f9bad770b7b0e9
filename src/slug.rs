/// Generate a URL-friendly slug from a product name.
///
/// Lowercases the name, drops everything that is not alphanumeric, `_`,
/// whitespace, or `-`, then collapses each run of whitespace/hyphens into a
/// single hyphen with no leading or trailing separator. Total over all
/// inputs; the empty string maps to the empty string.
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut separator_pending = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            separator_pending = true;
        } else if c.is_alphanumeric() || c == '_' {
            if separator_pending && !slug.is_empty() {
                slug.push('-');
            }
            separator_pending = false;
            slug.push(c);
        }
        // Anything else is stripped without becoming a separator.
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(generate_slug("Hublot Mp-10 Tourbillon"), "hublot-mp-10-tourbillon");
    }

    #[test]
    fn empty_name_yields_empty_slug() {
        assert_eq!(generate_slug(""), "");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(generate_slug("Swatch: Obsidian Ink!"), "swatch-obsidian-ink");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(generate_slug("Swatch  --  Up In Smoke"), "swatch-up-in-smoke");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(generate_slug("  -Movado Alta-  "), "movado-alta");
    }

    #[test]
    fn idempotent_on_its_own_output() {
        for name in ["Hublot MP-10 Tourbillon", "Swatch Caramellissima", "  odd -- Name?! "] {
            let once = generate_slug(name);
            assert_eq!(generate_slug(&once), once);
        }
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(generate_slug("watch_collection"), "watch_collection");
    }
}
