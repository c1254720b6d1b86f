//! Domain types for the to-do list.
//!
//! A to-do list is an ordered sequence of items plus two pieces of view-only
//! state: the text being typed and the active visibility filter.

use serde::{Deserialize, Serialize};

/// Shown by a view when the visible list is empty
pub const EMPTY_VIEW_LABEL: &str = "No records";

/// Unique identifier for a to-do item
///
/// Opaque: compared and displayed, never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap a raw identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single to-do item
///
/// `id` and `content` are fixed at creation; only the done flag changes.
/// Serialized as `{ "id": ..., "content": ..., "isDone": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    content: String,
    is_done: bool,
}

impl Item {
    /// Creates a new, not yet done, item
    #[must_use]
    pub fn new(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            is_done: false,
        }
    }

    /// Same item with the done flag set to `is_done`
    #[must_use]
    pub fn with_done(mut self, is_done: bool) -> Self {
        self.is_done = is_done;
        self
    }

    /// Identifier
    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// Text as entered
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the item has been completed
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    pub(crate) const fn toggle(&mut self) {
        self.is_done = !self.is_done;
    }
}

/// Which items a view shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityFilter {
    /// Every item
    #[default]
    All,
    /// Items not yet done
    Active,
    /// Completed items
    Done,
}

impl VisibilityFilter {
    /// All filters, in tab order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Done];

    /// Tab label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All items",
            Self::Active => "Active items",
            Self::Done => "Done items",
        }
    }

    /// Whether `item` passes this filter
    #[must_use]
    pub const fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.is_done,
            Self::Done => item.is_done,
        }
    }
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the derived view
///
/// `position` is 1-based and counts rows of the *visible* list, so it differs
/// from the item's index in the backing list whenever a filter hides items.
/// Address items by `item.id()`, never by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleRow {
    /// 1-based row number within the visible list
    pub position: usize,
    /// The item shown on this row
    pub item: Item,
}

/// State of the to-do list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// Text typed but not yet added
    pub pending_input: String,
    /// All items, in insertion order
    pub items: Vec<Item>,
    /// Active visibility filter
    pub filter: VisibilityFilter,
}

impl TodoState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State holding previously persisted items, with default view state
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of items not yet done
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_done()).count()
    }

    /// Returns the number of done items
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_done()).count()
    }

    /// Returns an item by ID
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn exists(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Items passing the active filter, in list order
    #[must_use]
    pub fn visible_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .cloned()
            .collect()
    }

    /// Numbered rows of the visible list
    #[must_use]
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        self.visible_items()
            .into_iter()
            .enumerate()
            .map(|(index, item)| VisibleRow {
                position: index + 1,
                item,
            })
            .collect()
    }
}

/// Every intent the view can dispatch
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Replace the pending input text
    SetPendingInput {
        /// New text, unvalidated
        text: String,
    },

    /// Turn the pending input into a new item
    AddItem,

    /// Flip an item's done flag
    ToggleItem {
        /// Item to toggle
        id: ItemId,
    },

    /// Change which items are visible
    SetFilter {
        /// New filter
        filter: VisibilityFilter,
    },
}
