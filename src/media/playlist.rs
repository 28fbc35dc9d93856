// SPDX-License-Identifier: MPL-2.0
//! Ordered list of loaded items with a selection of up to two of them.

use super::DisplayItem;

/// Source of the items the split view draws.
pub trait Playlist {
    /// Returns up to two selected items. The first slot is filled before the second.
    fn selected_items(&self) -> (Option<&dyn DisplayItem>, Option<&dyn DisplayItem>);
}

/// Playlist backed by a vector of boxed items.
#[derive(Default)]
pub struct MediaPlaylist {
    items: Vec<Box<dyn DisplayItem>>,
    selection: [Option<usize>; 2],
}

impl std::fmt::Debug for MediaPlaylist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaPlaylist")
            .field("items", &self.names())
            .field("selection", &self.selection)
            .finish()
    }
}

impl MediaPlaylist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item and returns its index.
    pub fn push(&mut self, item: Box<dyn DisplayItem>) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&dyn DisplayItem> {
        self.items.get(index).map(|item| item.as_ref())
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name().to_string()).collect()
    }

    /// Selects up to two items. Out-of-range indices are dropped, and a lone
    /// second selection moves into the first slot.
    pub fn select(&mut self, first: Option<usize>, second: Option<usize>) {
        let valid = |index: Option<usize>| index.filter(|&i| i < self.items.len());
        self.selection = match (valid(first), valid(second)) {
            (None, second) => [second, None],
            (first, second) => [first, second],
        };
    }

    #[must_use]
    pub fn selection(&self) -> [Option<usize>; 2] {
        self.selection
    }

    /// Longest frame count among the selected items (at least 1).
    #[must_use]
    pub fn max_frame_count(&self) -> usize {
        self.selection
            .iter()
            .flatten()
            .filter_map(|&index| self.item(index))
            .map(|item| item.frame_count())
            .max()
            .unwrap_or(1)
            .max(1)
    }
}

impl Playlist for MediaPlaylist {
    fn selected_items(&self) -> (Option<&dyn DisplayItem>, Option<&dyn DisplayItem>) {
        let [first, second] = self.selection;
        (
            first.and_then(|index| self.item(index)),
            second.and_then(|index| self.item(index)),
        )
    }
}
