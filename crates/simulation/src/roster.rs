use std::collections::HashSet;

use stocksim_core::{DomainError, DomainResult};
use stocksim_inventory::{InventoryItem, ItemSpec, ItemSummary};

/// Fixed, ordered collection of items simulated together.
///
/// Names are unique. Order is fixed at construction and never changes; there
/// is no way to add or remove items once a roster exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    items: Vec<InventoryItem>,
}

impl Roster {
    pub fn new(items: Vec<InventoryItem>) -> DomainResult<Self> {
        // Names that differ only by case or space/underscore share a log file.
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.name().slug()) {
                return Err(DomainError::conflict(format!(
                    "duplicate item name in roster: {}",
                    item.name()
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn from_specs(specs: &[ItemSpec]) -> DomainResult<Self> {
        let items = specs
            .iter()
            .map(InventoryItem::from_spec)
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(items)
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.name().as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Summaries in roster order.
    pub fn summaries(&self) -> Vec<ItemSummary> {
        self.items.iter().map(InventoryItem::summary).collect()
    }

    pub(crate) fn items_mut(&mut self) -> &mut [InventoryItem] {
        &mut self.items
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a InventoryItem;
    type IntoIter = core::slice::Iter<'a, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_conflict() {
        let specs = vec![
            ItemSpec::new("Nail Polish", 60, 20, 50),
            ItemSpec::new("Nail Polish ", 10, 5, 5),
        ];
        match Roster::from_specs(&specs) {
            Err(DomainError::Conflict(msg)) => assert!(msg.contains("Nail Polish")),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn names_sharing_a_log_file_conflict() {
        for other in ["nail polish", "Nail_Polish", "NAIL POLISH"] {
            let specs = vec![
                ItemSpec::new("Nail Polish", 60, 20, 50),
                ItemSpec::new(other, 10, 5, 5),
            ];
            match Roster::from_specs(&specs) {
                Err(DomainError::Conflict(msg)) => assert!(msg.contains(other)),
                result => panic!("expected conflict for {other:?}, got {result:?}"),
            }
        }
    }

    #[test]
    fn invalid_item_fails_the_whole_roster() {
        let specs = vec![
            ItemSpec::new("Nail Polish", 60, 20, 50),
            ItemSpec::new("Acrylic Powder", -40, 15, 30),
        ];
        assert!(matches!(
            Roster::from_specs(&specs),
            Err(DomainError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn order_and_lookup_are_preserved() {
        let roster = Roster::from_specs(&[
            ItemSpec::new("Nail Polish", 60, 20, 50),
            ItemSpec::new("Acrylic Powder", 40, 15, 30),
        ])
        .unwrap();

        let names: Vec<&str> = roster.into_iter().map(|i| i.name().as_str()).collect();
        assert_eq!(names, vec!["Nail Polish", "Acrylic Powder"]);
        assert_eq!(roster.get("Acrylic Powder").map(|i| i.stock()), Some(40));
        assert!(roster.get("Gel").is_none());
        assert_eq!(roster.summaries().len(), 2);
    }

    #[test]
    fn empty_roster_is_allowed() {
        let roster = Roster::new(Vec::new()).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }
}
