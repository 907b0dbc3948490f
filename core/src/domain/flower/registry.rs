use std::collections::HashMap;

use crate::domain::flower::entities::{FlowerEntry, Safety};

pub const SAFE_FLOWERS: &[(&str, &str)] = &[
    ("astilbe", "✅ Astilbe is totally safe for both cats and dogs."),
    ("erica", "✅ Erica is pet friendly."),
    ("freesia", "✅ Freesias are safe for pets."),
    ("greenbell", "✅ Greenbell is safe."),
    ("lisianthus", "✅ Lisianthus is safe."),
    ("limonium", "✅ Limonium is safe."),
    ("olive", "✅ Olive is safe."),
    ("pitto", "✅ Pitto is non-toxic."),
    ("pussy willow", "✅ Pussy willow is safe."),
    ("roses", "✅ Roses are safe (watch for thorns)."),
    ("snapdragons", "✅ Snapdragons are safe."),
    ("statice", "✅ Statice is safe."),
    ("stock", "✅ Stock is safe."),
    ("veronica", "✅ Veronica is safe."),
    ("sunflowers", "✅ Sunflowers are safe."),
    ("waxflower", "✅ Waxflower is safe."),
];

pub const TOXIC_FLOWERS: &[(&str, &str)] = &[
    ("alstroemeria", "⚠️ Toxic to cats and dogs."),
    ("astrantia", "⚠️ Toxic to cats and dogs."),
    ("asparagus fern", "⚠️ Toxic to pets."),
    ("bupleurum", "⚠️ Toxic to pets."),
    ("campanula bells", "⚠️ Toxic to pets."),
    ("clematis", "⚠️ Toxic to pets."),
    ("craspedia", "⚠️ Toxic to pets."),
    ("delphinium", "⚠️ Toxic to pets."),
    ("eucalyptus", "⚠️ Toxic to pets."),
    ("lavender", "⚠️ Toxic to pets in some cases."),
    ("lilies", "☠️ EXTREMELY toxic to cats."),
    ("peonies", "⚠️ Toxic to pets."),
    ("ranunculus", "⚠️ Toxic to pets."),
    ("ruscus", "⚠️ Toxic to pets."),
    ("senecio", "⚠️ Toxic to pets."),
    ("solidago", "⚠️ Toxic to pets."),
    ("sweet william", "⚠️ Toxic to pets."),
    ("tulip", "⚠️ Toxic to pets."),
];

/// Read-only lookup table built once from the safe and toxic tables.
///
/// Keys are trimmed and lowercased. Entries keep their insertion order
/// (safe first, then toxic) so prompt excerpts are stable. When both
/// tables carry the same key the later write wins.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<FlowerEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new(safe: &[(&str, &str)], toxic: &[(&str, &str)]) -> Self {
        let mut registry = Self::default();
        let tagged = safe
            .iter()
            .map(|row| (row, Safety::Safe))
            .chain(toxic.iter().map(|row| (row, Safety::Toxic)));

        for ((name, message), safety) in tagged {
            registry.insert(FlowerEntry::new(
                name.trim().to_lowercase(),
                *message,
                safety,
            ));
        }

        registry
    }

    /// The shop's curated flower list.
    pub fn curated() -> Self {
        Self::new(SAFE_FLOWERS, TOXIC_FLOWERS)
    }

    fn insert(&mut self, entry: FlowerEntry) {
        match self.index.get(&entry.name) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FlowerEntry> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowerEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// First `limit` entries in insertion order.
    pub fn excerpt(&self, limit: usize) -> &[FlowerEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
