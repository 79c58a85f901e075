//! Display ordering and drag-and-drop reorder planning.
//!
//! Rows that carry a `sort_order` (navigation items, services) are shown
//! ascending by that value, ties broken by id so the order matches insertion.
//! A reorder request is the complete list of ids in their new order; it is
//! turned into an [`OrderAssignment`] list that the repository persists in a
//! single transaction.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// A row that takes part in manual ordering.
pub trait Ordered {
    fn id(&self) -> DbId;
    fn sort_order(&self) -> i32;
}

/// Sort rows for display: `sort_order` ascending, then id ascending.
pub fn sort_for_display<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| (item.sort_order(), item.id()));
}

/// New `sort_order` for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderAssignment {
    pub id: DbId,
    pub sort_order: i32,
}

/// Turn a requested order into `sort_order = index + 1` assignments.
///
/// `requested` must be a permutation of `existing`: every existing id exactly
/// once and nothing else. Anything else is rejected before a write happens.
pub fn plan_reorder(existing: &[DbId], requested: &[DbId]) -> Result<Vec<OrderAssignment>, CoreError> {
    let known: HashSet<DbId> = existing.iter().copied().collect();
    let mut seen = HashSet::with_capacity(requested.len());

    for id in requested {
        if !known.contains(id) {
            return Err(CoreError::Validation(format!("Unknown item id in reorder: {id}")));
        }
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!("Duplicate item id in reorder: {id}")));
        }
    }

    if seen.len() != known.len() {
        let mut missing: Vec<DbId> = known.difference(&seen).copied().collect();
        missing.sort_unstable();
        return Err(CoreError::Validation(format!(
            "Reorder must list every item; missing ids: {missing:?}"
        )));
    }

    requested
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let sort_order = i32::try_from(index + 1)
                .map_err(|_| CoreError::Validation("Too many items to reorder".into()))?;
            Ok(OrderAssignment { id: *id, sort_order })
        })
        .collect()
}
