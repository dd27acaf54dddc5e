//! File identifiers for leaf items
//!
//! Display names become lowercase ASCII slugs (`"BU-Connect"` -> `bu-connect`).
//! Collisions inside one category are settled once, when the catalog is built,
//! by [`SlugAllocator`].

use std::collections::HashSet;

/// Lowercase, collapse every run of non `[a-z0-9]` characters into one `-`,
/// and trim leading/trailing dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// First four-digit year in a period string, or `"na"`
pub fn year_from_period(period: &str) -> String {
    let bytes = period.as_bytes();
    bytes
        .windows(4)
        .position(|w| w.iter().all(u8::is_ascii_digit))
        .map(|start| period[start..start + 4].to_string())
        .unwrap_or_else(|| "na".to_string())
}

/// Hands out unique slugs within one category.
///
/// The first claimant keeps the base slug. Later ones get `-<year>` when a
/// year is known and still free, otherwise the first free `-<n>` (n >= 2).
#[derive(Debug, Default)]
pub struct SlugAllocator {
    taken: HashSet<String>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, base: &str, year: Option<&str>) -> String {
        let base = if base.is_empty() { "untitled" } else { base };

        if self.taken.insert(base.to_string()) {
            return base.to_string();
        }

        if let Some(year) = year.filter(|y| *y != "na") {
            let candidate = format!("{base}-{year}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }

        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(
            slugify("Serverless Gameday Notification System"),
            "serverless-gameday-notification-system"
        );
        assert_eq!(slugify("BU-Connect"), "bu-connect");
        assert_eq!(slugify("sodeeq.com"), "sodeeq-com");
    }

    #[test]
    fn test_slugify_punctuation_and_unicode() {
        assert_eq!(
            slugify("Blog Application (Node.js Backend Project)"),
            "blog-application-node-js-backend-project"
        );
        assert_eq!(
            slugify("Google Developer Students’ Club (GDSC)"),
            "google-developer-students-club-gdsc"
        );
        assert_eq!(
            slugify("InclusiveHealth – Multilingual Healthcare"),
            "inclusivehealth-multilingual-healthcare"
        );
        assert_eq!(slugify("  --Hello--  "), "hello");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_year_from_period() {
        assert_eq!(year_from_period("July 2024 – October 2024"), "2024");
        assert_eq!(year_from_period("Hack the Change 2025"), "2025");
        assert_eq!(year_from_period("Present"), "na");
        assert_eq!(year_from_period("’24 – ’25"), "na");
    }

    #[test]
    fn test_allocator_keeps_first_and_suffixes_year() {
        let mut alloc = SlugAllocator::new();
        assert_eq!(alloc.allocate("quiz-app", Some("2023")), "quiz-app");
        assert_eq!(alloc.allocate("quiz-app", Some("2024")), "quiz-app-2024");
    }

    #[test]
    fn test_allocator_falls_back_to_counter() {
        let mut alloc = SlugAllocator::new();
        assert_eq!(alloc.allocate("kdnplus-2024", None), "kdnplus-2024");
        assert_eq!(alloc.allocate("kdnplus-2024", None), "kdnplus-2024-2");
        assert_eq!(alloc.allocate("kdnplus-2024", Some("na")), "kdnplus-2024-3");

        assert_eq!(alloc.allocate("app", Some("2023")), "app");
        assert_eq!(alloc.allocate("app", Some("2023")), "app-2023");
        assert_eq!(alloc.allocate("app", Some("2023")), "app-2");
    }

    #[test]
    fn test_allocator_empty_base() {
        let mut alloc = SlugAllocator::new();
        assert_eq!(alloc.allocate("", None), "untitled");
        assert_eq!(alloc.allocate("", None), "untitled-2");
    }
}
