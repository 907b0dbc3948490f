use strsim::normalized_levenshtein;

use crate::domain::flower::{entities::FlowerEntry, registry::Registry};

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.76;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Exact,
    Fuzzy { score: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowerMatch<'a> {
    pub entry: &'a FlowerEntry,
    pub kind: MatchKind,
}

/// Resolves a normalized name against the registry: direct key lookup
/// first, then the most similar key scoring at least `threshold`.
///
/// Ties on the top score go to the lexicographically smallest key.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    threshold: f64,
}

impl Matcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn find<'a>(&self, name: &str, registry: &'a Registry) -> Option<FlowerMatch<'a>> {
        if let Some(entry) = registry.get(name) {
            return Some(FlowerMatch {
                entry,
                kind: MatchKind::Exact,
            });
        }

        let mut best: Option<(f64, &FlowerEntry)> = None;
        for entry in registry.iter() {
            let score = normalized_levenshtein(name, &entry.name);
            match best {
                Some((top, current))
                    if score < top || (score == top && entry.name >= current.name) => {}
                _ => best = Some((score, entry)),
            }
        }

        best.filter(|(score, _)| *score >= self.threshold)
            .map(|(score, entry)| FlowerMatch {
                entry,
                kind: MatchKind::Fuzzy { score },
            })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let registry = Registry::curated();
        let found = Matcher::default().find("roses", &registry).unwrap();
        assert_eq!(found.entry.name, "roses");
        assert_eq!(found.kind, MatchKind::Exact);
    }

    #[test]
    fn test_typo_resolves_to_canonical_key() {
        let registry = Registry::curated();
        let found = Matcher::default().find("lillies", &registry).unwrap();
        assert_eq!(found.entry.name, "lilies");
        assert!(matches!(found.kind, MatchKind::Fuzzy { score } if score >= 0.76));
    }

    #[test]
    fn test_singular_and_plural_variants_match() {
        let registry = Registry::curated();
        let matcher = Matcher::default();
        assert_eq!(matcher.find("rose", &registry).unwrap().entry.name, "roses");
        assert_eq!(matcher.find("tulips", &registry).unwrap().entry.name, "tulip");
        assert_eq!(
            matcher.find("sunflower", &registry).unwrap().entry.name,
            "sunflowers"
        );
    }

    #[test]
    fn test_unrelated_name_has_no_match() {
        let registry = Registry::curated();
        assert!(Matcher::default().find("dracaena", &registry).is_none());
        assert!(Matcher::default().find("monstera", &registry).is_none());
    }

    #[test]
    fn test_tie_goes_to_smallest_key() {
        let registry = Registry::new(&[("abe", "e"), ("abd", "d")], &[]);
        let found = Matcher::new(0.5).find("abc", &registry).unwrap();
        assert_eq!(found.entry.name, "abd");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // one edit over four characters scores exactly 0.75
        let registry = Registry::new(&[("fern", "✅")], &[]);
        assert!(Matcher::new(0.75).find("fern", &registry).is_some());
        assert!(Matcher::new(0.75).find("fery", &registry).is_some());
        assert!(Matcher::new(0.76).find("fery", &registry).is_none());
    }
}
