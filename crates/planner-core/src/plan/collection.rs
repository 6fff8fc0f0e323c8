//! Ordered plan items plus the current selection.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::PlanItem;

/// A plan whose items break the collection's ordering or enrichment rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("plan item {0:?} has a caption without hashtags or hashtags without a caption")]
    HalfEnriched(String),

    #[error("plan item id {0:?} appears more than once")]
    DuplicateId(String),

    #[error("plan item {id:?} dated {date} does not follow {previous}")]
    OutOfOrder {
        id: String,
        date: NaiveDate,
        previous: NaiveDate,
    },
}

/// The plan store: items in date order and an optional selected item id.
///
/// `selected_id`, when set, always names an item in `items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCollection {
    #[serde(default)]
    pub items: Vec<PlanItem>,
    #[serde(default)]
    pub selected_id: Option<String>,
}

impl PlanCollection {
    /// Build a collection with the first item selected.
    pub fn from_items(items: Vec<PlanItem>) -> Self {
        let selected_id = items.first().map(|i| i.id.clone());
        Self { items, selected_id }
    }

    /// Replace every item and reset the selection to the first new item.
    pub fn replace(&mut self, items: Vec<PlanItem>) {
        *self = Self::from_items(items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanItem> {
        self.items.iter()
    }

    pub fn get(&self, id: &str) -> Option<&PlanItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut PlanItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn selected(&self) -> Option<&PlanItem> {
        self.selected_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_id.as_deref().and_then(|id| self.position(id))
    }

    /// Select the item with `id`. Unknown ids leave the selection unchanged
    /// and return `false`.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_some() {
            self.selected_id = Some(id.to_owned());
            true
        } else {
            false
        }
    }

    /// Clear a selection that no longer names an item. Returns `true` if the
    /// selection was cleared.
    pub fn repair_selection(&mut self) -> bool {
        match self.selected_id.as_deref() {
            Some(id) if self.get(id).is_none() => {
                self.selected_id = None;
                true
            }
            _ => false,
        }
    }

    /// Check that ids are unique, dates strictly increase, and every item
    /// carries either both or neither of caption and hashtags.
    pub fn validate(&self) -> Result<(), PlanError> {
        let mut ids = HashSet::new();
        let mut previous: Option<NaiveDate> = None;
        for item in &self.items {
            if item.caption.is_some() != item.hashtags.is_some() {
                return Err(PlanError::HalfEnriched(item.id.clone()));
            }
            if !ids.insert(item.id.as_str()) {
                return Err(PlanError::DuplicateId(item.id.clone()));
            }
            if let Some(previous) = previous.filter(|p| item.date <= *p) {
                return Err(PlanError::OutOfOrder {
                    id: item.id.clone(),
                    date: item.date,
                    previous,
                });
            }
            previous = Some(item.date);
        }
        Ok(())
    }

    pub fn enriched_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_enriched()).count()
    }
}

impl<'a> IntoIterator for &'a PlanCollection {
    type Item = &'a PlanItem;
    type IntoIter = std::slice::Iter<'a, PlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
