use crate::render::{DisplayHandle, DisplayProps};
use crate::shape::ShapeKind;

/// A display object attached to the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub handle: DisplayHandle,
    pub kind: ShapeKind,
    pub props: DisplayProps,
}

impl DisplayItem {
    #[inline]
    pub fn new(handle: DisplayHandle, kind: ShapeKind, props: DisplayProps) -> Self {
        Self { handle, kind, props }
    }
}

/// Scene contents in paint order (back-to-front).
///
/// Insertion order is the z-order: later items draw on top.
/// Performance characteristics:
/// - `push()` is O(1)
/// - `remove()` and lookups are O(n); scenes are small and removal is rare
#[derive(Debug, Default)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
}

impl DisplayList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every item. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` on top of everything already in the list.
    #[inline]
    pub fn push(&mut self, item: DisplayItem) {
        debug_assert!(self.get(item.handle).is_none(), "display item pushed twice");
        self.items.push(item);
    }

    /// Removes the item for `handle`, preserving the order of the rest.
    pub fn remove(&mut self, handle: DisplayHandle) -> Option<DisplayItem> {
        let idx = self.items.iter().position(|i| i.handle == handle)?;
        Some(self.items.remove(idx))
    }

    pub fn get(&self, handle: DisplayHandle) -> Option<&DisplayItem> {
        self.items.iter().find(|i| i.handle == handle)
    }

    pub fn get_mut(&mut self, handle: DisplayHandle) -> Option<&mut DisplayItem> {
        self.items.iter_mut().find(|i| i.handle == handle)
    }

    /// Visible items in paint order.
    pub fn iter_visible(&self) -> impl Iterator<Item = &DisplayItem> {
        self.items.iter().filter(|i| i.props.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, visible: bool) -> DisplayItem {
        DisplayItem::new(
            DisplayHandle(id),
            ShapeKind::Rectangle,
            DisplayProps { visible, ..DisplayProps::default() },
        )
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut list = DisplayList::new();
        list.push(item(1, true));
        list.push(item(2, true));
        list.push(item(3, true));
        assert!(list.remove(DisplayHandle(2)).is_some());
        let ids: Vec<u64> = list.items().iter().map(|i| i.handle.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_missing_is_none() {
        let mut list = DisplayList::new();
        assert!(list.remove(DisplayHandle(9)).is_none());
    }

    #[test]
    fn iter_visible_skips_hidden() {
        let mut list = DisplayList::new();
        list.push(item(1, false));
        list.push(item(2, true));
        let ids: Vec<u64> = list.iter_visible().map(|i| i.handle.0).collect();
        assert_eq!(ids, vec![2]);
    }
}
