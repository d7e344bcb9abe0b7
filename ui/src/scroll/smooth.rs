//! In-page anchor navigation.

/// `#about` -> `Some("#about")`; a bare `#` or a non-fragment link -> `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

/// Where to scroll so the section starts right under the fixed navbar.
pub fn scroll_target(section_top: i32, nav_height: i32) -> f64 {
    (section_top - nav_height) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/impressum"), None);
        assert_eq!(anchor_target("#menu"), Some("#menu"));
    }

    #[test]
    fn target_sits_below_navbar() {
        assert_eq!(scroll_target(1200, 80), 1120.0);
        // browser clamps negative tops itself
        assert_eq!(scroll_target(0, 80), -80.0);
    }
}
