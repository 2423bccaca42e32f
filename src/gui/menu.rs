//! Main Menu
//!
//! Ordered list of entries with a wrapping selection cursor. Entries are
//! fixed at construction; insertion order is both display and navigation
//! order.

use super::layout;

/// What confirming a menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    /// Listed but not wired to anything yet; confirming it is a no-op
    LoadGame,
    OpenSettings,
    Exit,
}

/// A menu entry: localization key plus action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub text_key: &'static str,
    pub action: MenuAction,
}

impl MenuEntry {
    pub const fn new(text_key: &'static str, action: MenuAction) -> Self {
        MenuEntry { text_key, action }
    }
}

/// Main menu with a selection cursor
///
/// The cursor invariant `selected < entries.len()` holds at all times:
/// navigation wraps at both ends and out-of-range selections are ignored.
#[derive(Debug, Clone)]
pub struct MainMenu {
    entries: Vec<MenuEntry>,
    selected_index: usize,
}

impl MainMenu {
    /// Creates a menu; `entries` must not be empty
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        assert!(!entries.is_empty(), "a menu needs at least one entry");
        MainMenu {
            entries,
            selected_index: 0,
        }
    }

    /// The shell's standard entries
    pub fn standard() -> Self {
        Self::new(vec![
            MenuEntry::new("New Game", MenuAction::StartGame),
            MenuEntry::new("Load Game", MenuAction::LoadGame),
            MenuEntry::new("Settings", MenuAction::OpenSettings),
            MenuEntry::new("Exit", MenuAction::Exit),
        ])
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = self.entries.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.entries.len();
    }

    /// Selects `index` if it names an entry
    pub fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected_index = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> &MenuEntry {
        &self.entries[self.selected_index]
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Index of the entry whose hit box contains the point
    pub fn entry_at(&self, x: i32, y: i32) -> Option<usize> {
        (0..self.entries.len()).find(|&i| layout::hit_test(layout::menu_entry(i), x, y))
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_entries_in_order() {
        let menu = MainMenu::standard();
        let keys: Vec<_> = menu.entries().iter().map(|e| e.text_key).collect();
        assert_eq!(keys, vec!["New Game", "Load Game", "Settings", "Exit"]);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut menu = MainMenu::standard();
        menu.select_previous();
        assert_eq!(menu.selected_index(), 3);
        menu.select_next();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut menu = MainMenu::standard();
        // Deterministic mix of ups and downs
        for i in 0..500u32 {
            if i.wrapping_mul(2_654_435_761) % 3 == 0 {
                menu.select_previous();
            } else {
                menu.select_next();
            }
            assert!(menu.selected_index() < menu.entries().len());
        }
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut menu = MainMenu::standard();
        menu.select(2);
        menu.select(99);
        assert_eq!(menu.selected_index(), 2);
        assert_eq!(menu.selected().action, MenuAction::OpenSettings);
    }

    #[test]
    fn test_entry_at_uses_layout() {
        let menu = MainMenu::standard();
        let third = layout::menu_entry(2);
        assert_eq!(menu.entry_at(third.x() + 5, third.y() + 5), Some(2));
        assert_eq!(menu.entry_at(10, 10), None);
    }

    #[test]
    #[should_panic]
    fn test_empty_menu_is_rejected() {
        MainMenu::new(Vec::new());
    }
}
