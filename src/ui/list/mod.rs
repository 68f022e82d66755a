//! Generic list host
//!
//! [`ItemList`] stores boxed [`ListItem`]s and draws them through an
//! [`ItemDelegate`], so one list can host any item kind whose delegate
//! knows how to draw it.

mod render;

use std::any::Any;

use crossterm::event::Event;
use ratatui::text::Line;

use crate::ui::symbols;

/// What a list needs from each entry
pub trait ListItem {
    /// Stable identity, unique within one list
    fn id(&self) -> String;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Text matched by [`ItemList::find`]
    fn filter_value(&self) -> &str;

    /// Lets a delegate downcast to the item kind it draws
    fn as_any(&self) -> &dyn Any;
}

/// Draws list entries, one call per visible row
pub trait ItemDelegate {
    /// Command returned from [`ItemDelegate::on_event`]
    type Action;

    /// Lines each row occupies
    fn height(&self) -> u16;

    /// Blank lines between rows
    fn spacing(&self) -> u16;

    fn on_event(&self, event: &Event, list: &mut ListContext) -> Option<Self::Action>;

    /// Append the row for `item` at `index` to `out`
    ///
    /// Writing nothing leaves the row blank.
    fn render(
        &self,
        out: &mut Line<'static>,
        list: &ListContext,
        index: usize,
        item: &dyn ListItem,
    );
}

/// List state visible to a delegate during one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListContext {
    /// Width of the list area in cells
    pub width: u16,
    pub selected_index: usize,
}

/// List of items drawn through a delegate
pub struct ItemList<D> {
    items: Vec<Box<dyn ListItem>>,
    delegate: D,
    selected_index: usize,
    scroll_offset: usize,
    /// Width of the last rendered area
    width: u16,
    /// Placeholder drawn when there are no items
    empty_text: &'static str,
}

impl<D: ItemDelegate> ItemList<D> {
    pub fn new(delegate: D) -> Self {
        Self {
            items: Vec::new(),
            delegate,
            selected_index: 0,
            scroll_offset: 0,
            width: 0,
            empty_text: symbols::empty::NO_ITEMS,
        }
    }

    pub fn with_empty_text(mut self, text: &'static str) -> Self {
        self.empty_text = text;
        self
    }

    pub fn with_items(mut self, items: Vec<Box<dyn ListItem>>) -> Self {
        self.set_items(items);
        self
    }

    /// Replace the items, keeping the selection on the same entry
    ///
    /// The previously selected item is looked up by [`ListItem::id`]; if it is
    /// gone the selection resets to the first item.
    pub fn set_items(&mut self, items: Vec<Box<dyn ListItem>>) {
        let selected_id = self.selected_item().map(|item| item.id());
        self.items = items;
        self.selected_index = selected_id
            .and_then(|id| self.items.iter().position(|item| item.id() == id))
            .unwrap_or(0);
        self.scroll_offset = self.scroll_offset.min(self.selected_index);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&dyn ListItem> {
        self.items.get(self.selected_index).map(|item| &**item)
    }

    /// Select `index`, clamped to the last item
    pub fn select(&mut self, index: usize) {
        self.selected_index = index.min(self.items.len().saturating_sub(1));
    }

    /// Index of the first item whose filter value contains `query`
    /// (case-insensitive)
    pub fn find(&self, query: &str) -> Option<usize> {
        let query_lower = query.to_lowercase();
        self.items
            .iter()
            .position(|item| item.filter_value().to_lowercase().contains(&query_lower))
    }

    /// Forward an event to the delegate
    ///
    /// A selection change made by the delegate is applied (clamped) afterwards.
    pub fn handle_event(&mut self, event: &Event) -> Option<D::Action> {
        let mut context = self.context();
        let action = self.delegate.on_event(event, &mut context);
        if context.selected_index != self.selected_index {
            self.select(context.selected_index);
        }
        action
    }

    fn context(&self) -> ListContext {
        ListContext {
            width: self.width,
            selected_index: self.selected_index,
        }
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for ItemList<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemList")
            .field("items", &self.items.len())
            .field("delegate", &self.delegate)
            .field("selected_index", &self.selected_index)
            .field("scroll_offset", &self.scroll_offset)
            .field("width", &self.width)
            .finish()
    }
}
