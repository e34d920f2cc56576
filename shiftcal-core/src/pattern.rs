//! Attendance pattern catalog.
//!
//! Patterns are a small ordered set (early shift, day shift, off, ...) and
//! the ordering matters: clicking a cell cycles through the catalog in this
//! order, wrapping back to the first pattern after the last.

use serde::{Deserialize, Serialize};

/// Pattern id meaning "no assignment".
pub const UNASSIGNED: i64 = 0;

/// A named attendance pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPattern {
    pub id: i64,
    #[serde(rename = "pattern_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The ordered pattern catalog for a session.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    patterns: Vec<ShiftPattern>,
}

impl PatternCatalog {
    pub fn new(patterns: Vec<ShiftPattern>) -> Self {
        PatternCatalog { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShiftPattern> {
        self.patterns.iter()
    }

    pub fn get(&self, id: i64) -> Option<&ShiftPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Display name for a pattern id, empty string when unknown or unassigned.
    pub fn name_of(&self, id: i64) -> &str {
        self.get(id).map(|p| p.name.as_str()).unwrap_or("")
    }

    /// Resolve a user-supplied pattern reference: a numeric id or a name.
    pub fn resolve(&self, s: &str) -> Option<&ShiftPattern> {
        if let Ok(id) = s.parse::<i64>() {
            return self.get(id);
        }
        self.patterns.iter().find(|p| p.name == s)
    }

    /// The pattern the click-to-cycle interaction moves to next.
    ///
    /// Unassigned (or an id no longer in the catalog) cycles to the first
    /// pattern; the last pattern wraps to the first. Returns `None` only for
    /// an empty catalog.
    pub fn next_after(&self, current: i64) -> Option<i64> {
        if self.patterns.is_empty() {
            return None;
        }
        let next_index = match self.patterns.iter().position(|p| p.id == current) {
            Some(i) if current != UNASSIGNED => (i + 1) % self.patterns.len(),
            _ => 0,
        };
        Some(self.patterns[next_index].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PatternCatalog {
        PatternCatalog::new(vec![
            ShiftPattern {
                id: 3,
                name: "early".to_string(),
                description: String::new(),
            },
            ShiftPattern {
                id: 5,
                name: "late".to_string(),
                description: String::new(),
            },
            ShiftPattern {
                id: 7,
                name: "off".to_string(),
                description: String::new(),
            },
        ])
    }

    #[test]
    fn test_name_of_unknown_is_empty() {
        let c = catalog();
        assert_eq!(c.name_of(5), "late");
        assert_eq!(c.name_of(99), "");
        assert_eq!(c.name_of(UNASSIGNED), "");
    }

    #[test]
    fn test_unassigned_cycles_to_first() {
        let c = catalog();
        assert_eq!(c.next_after(UNASSIGNED), Some(3));
    }

    #[test]
    fn test_stale_id_cycles_to_first() {
        // Pattern was deleted from the catalog upstream; a cell may still
        // carry its id.
        let c = catalog();
        assert_eq!(c.next_after(42), Some(3));
    }

    #[test]
    fn test_cycle_wraps() {
        let c = catalog();
        assert_eq!(c.next_after(7), Some(3));
    }

    #[test]
    fn test_cycle_is_total() {
        // Applying next_after len() times from any starting id returns to it.
        let c = catalog();
        for start in [3, 5, 7] {
            let mut id = start;
            for _ in 0..c.len() {
                id = c.next_after(id).unwrap();
            }
            assert_eq!(id, start);
        }
    }

    #[test]
    fn test_empty_catalog_has_no_next() {
        let c = PatternCatalog::default();
        assert_eq!(c.next_after(UNASSIGNED), None);
    }

    #[test]
    fn test_resolve_by_id_or_name() {
        let c = catalog();
        assert_eq!(c.resolve("5").map(|p| p.id), Some(5));
        assert_eq!(c.resolve("off").map(|p| p.id), Some(7));
        assert!(c.resolve("graveyard").is_none());
    }
}
