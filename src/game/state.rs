use super::types::{Screen, ShellEvent};
use crate::gui::{MainMenu, MenuAction, SettingsPanel, SettingsTarget};
use crate::input_system::ShellAction;
use crate::localization::Language;
use log::info;

/// Owns the current screen and the widget state of every screen
///
/// Edges: Menu -> Playing, Menu -> Settings, Playing -> Menu,
/// Settings -> Menu. Exiting is reported as an event, not a state.
pub struct ScreenStateMachine {
    screen: Screen,
    menu: MainMenu,
    settings: SettingsPanel,
    cursor: (i32, i32),
}

impl ScreenStateMachine {
    pub fn new(master_volume: f64) -> Self {
        ScreenStateMachine {
            screen: Screen::Menu,
            menu: MainMenu::standard(),
            settings: SettingsPanel::new(master_volume),
            cursor: (0, 0),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    pub fn settings(&self) -> &SettingsPanel {
        &self.settings
    }

    pub fn language(&self) -> Language {
        self.settings.language()
    }

    /// Last pointer position seen
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Applies one edge-filtered action to the current screen
    pub fn handle(&mut self, action: ShellAction) -> Option<ShellEvent> {
        if let ShellAction::Hover(x, y) = action {
            self.cursor = (x, y);
        }

        match self.screen {
            Screen::Menu => self.handle_menu(action),
            Screen::Settings => self.handle_settings(action),
            Screen::Playing => match action {
                ShellAction::Escape => self.transition(Screen::Menu),
                _ => None,
            },
        }
    }

    fn handle_menu(&mut self, action: ShellAction) -> Option<ShellEvent> {
        match action {
            ShellAction::Escape => Some(ShellEvent::ExitRequested),
            ShellAction::NavigateUp => {
                self.menu.select_previous();
                None
            }
            ShellAction::NavigateDown => {
                self.menu.select_next();
                None
            }
            ShellAction::Confirm => self.activate(self.menu.selected().action),
            ShellAction::Hover(x, y) => {
                if let Some(index) = self.menu.entry_at(x, y) {
                    self.menu.select(index);
                }
                None
            }
            ShellAction::PointerPressed(x, y) => {
                let index = self.menu.entry_at(x, y)?;
                self.menu.select(index);
                self.activate(self.menu.selected().action)
            }
            _ => None,
        }
    }

    fn handle_settings(&mut self, action: ShellAction) -> Option<ShellEvent> {
        match action {
            ShellAction::Escape => self.transition(Screen::Menu),
            ShellAction::PointerPressed(x, y) => match self.settings.target_at(x, y)? {
                SettingsTarget::Language(language) => {
                    if self.settings.set_language(language) {
                        info!("Language set to {:?}", language);
                    }
                    None
                }
                SettingsTarget::VolumeSlider => self
                    .settings
                    .begin_drag(x)
                    .map(ShellEvent::MasterVolumeChanged),
                SettingsTarget::Back => self.transition(Screen::Menu),
            },
            ShellAction::PointerDragged(x, _) => {
                self.settings.drag_to(x).map(ShellEvent::MasterVolumeChanged)
            }
            ShellAction::PointerReleased => {
                self.settings.end_drag();
                None
            }
            _ => None,
        }
    }

    fn activate(&mut self, action: MenuAction) -> Option<ShellEvent> {
        match action {
            MenuAction::StartGame => self.transition(Screen::Playing),
            MenuAction::OpenSettings => self.transition(Screen::Settings),
            MenuAction::Exit => Some(ShellEvent::ExitRequested),
            MenuAction::LoadGame => {
                info!("Load Game selected; nothing to load");
                None
            }
        }
    }

    fn transition(&mut self, to: Screen) -> Option<ShellEvent> {
        if self.screen == Screen::Settings {
            self.settings.end_drag();
        }
        info!("Screen {:?} -> {:?}", self.screen, to);
        self.screen = to;
        Some(ShellEvent::ScreenChanged(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::layout;
    use crate::localization::resolve;

    fn machine() -> ScreenStateMachine {
        ScreenStateMachine::new(0.7)
    }

    fn centre(rect: sdl2::rect::Rect) -> (i32, i32) {
        (rect.center().x(), rect.center().y())
    }

    #[test]
    fn test_initial_state() {
        let sm = machine();
        assert_eq!(sm.screen(), Screen::Menu);
        assert_eq!(sm.language(), Language::Russian);
        assert_eq!(sm.menu().selected_index(), 0);
        assert_eq!(sm.settings().master_volume(), 0.7);
    }

    #[test]
    fn test_down_down_confirm_opens_settings() {
        let mut sm = machine();
        assert_eq!(sm.handle(ShellAction::NavigateDown), None);
        assert_eq!(sm.handle(ShellAction::NavigateDown), None);
        assert_eq!(sm.menu().selected().text_key, "Settings");
        assert_eq!(
            sm.handle(ShellAction::Confirm),
            Some(ShellEvent::ScreenChanged(Screen::Settings))
        );
        assert_eq!(sm.screen(), Screen::Settings);
    }

    #[test]
    fn test_escape_in_menu_requests_exit() {
        let mut sm = machine();
        for _ in 0..3 {
            assert_eq!(sm.handle(ShellAction::Escape), Some(ShellEvent::ExitRequested));
            assert_eq!(sm.screen(), Screen::Menu);
        }
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut sm = machine();
        sm.handle(ShellAction::Confirm);
        assert_eq!(sm.screen(), Screen::Playing);
        assert_eq!(
            sm.handle(ShellAction::Escape),
            Some(ShellEvent::ScreenChanged(Screen::Menu))
        );

        sm.menu.select(2);
        sm.handle(ShellAction::Confirm);
        assert_eq!(sm.screen(), Screen::Settings);
        sm.handle(ShellAction::Escape);
        assert_eq!(sm.screen(), Screen::Menu);
    }

    #[test]
    fn test_playing_ignores_everything_but_escape() {
        let mut sm = machine();
        sm.handle(ShellAction::Confirm);
        assert_eq!(sm.handle(ShellAction::NavigateDown), None);
        assert_eq!(sm.handle(ShellAction::Confirm), None);
        assert_eq!(sm.handle(ShellAction::PointerPressed(100, 300)), None);
        assert_eq!(sm.screen(), Screen::Playing);
    }

    #[test]
    fn test_hover_selects_entry() {
        let mut sm = machine();
        let (x, y) = centre(layout::menu_entry(3));
        sm.handle(ShellAction::Hover(x, y));
        assert_eq!(sm.menu().selected_index(), 3);

        // Off every entry: selection stays
        sm.handle(ShellAction::Hover(1000, 10));
        assert_eq!(sm.menu().selected_index(), 3);
        assert_eq!(sm.cursor(), (1000, 10));
    }

    #[test]
    fn test_click_on_entry_dispatches() {
        let mut sm = machine();
        let (x, y) = centre(layout::menu_entry(3));
        assert_eq!(
            sm.handle(ShellAction::PointerPressed(x, y)),
            Some(ShellEvent::ExitRequested)
        );

        let (x, y) = centre(layout::menu_entry(0));
        assert_eq!(
            sm.handle(ShellAction::PointerPressed(x, y)),
            Some(ShellEvent::ScreenChanged(Screen::Playing))
        );
    }

    #[test]
    fn test_click_outside_entries_is_a_no_op() {
        let mut sm = machine();
        assert_eq!(sm.handle(ShellAction::PointerPressed(5, 5)), None);
        assert_eq!(sm.handle(ShellAction::PointerPressed(-40, 9000)), None);
        assert_eq!(sm.screen(), Screen::Menu);
    }

    #[test]
    fn test_load_game_is_inert() {
        let mut sm = machine();
        sm.handle(ShellAction::NavigateDown);
        assert_eq!(sm.handle(ShellAction::Confirm), None);
        assert_eq!(sm.screen(), Screen::Menu);
    }

    #[test]
    fn test_click_english_switches_language() {
        let mut sm = machine();
        sm.menu.select(2);
        sm.handle(ShellAction::Confirm);

        let (x, y) = centre(layout::english_button());
        assert_eq!(sm.handle(ShellAction::PointerPressed(x, y)), None);
        assert_eq!(sm.language(), Language::English);
        assert_eq!(resolve("Back", sm.language()), "Back");

        let (x, y) = centre(layout::russian_button());
        sm.handle(ShellAction::PointerPressed(x, y));
        assert_eq!(resolve("Back", sm.language()), "Назад");
    }

    #[test]
    fn test_slider_drag_reports_volume() {
        let mut sm = machine();
        sm.menu.select(2);
        sm.handle(ShellAction::Confirm);

        let slider = layout::volume_slider();
        let y = slider.center().y();
        assert_eq!(
            sm.handle(ShellAction::PointerPressed(slider.x(), y)),
            Some(ShellEvent::MasterVolumeChanged(0.0))
        );
        assert_eq!(
            sm.handle(ShellAction::PointerDragged(slider.x() + 900, 0)),
            Some(ShellEvent::MasterVolumeChanged(1.0))
        );

        sm.handle(ShellAction::PointerReleased);
        assert!(!sm.settings().drag().active);
        assert_eq!(sm.handle(ShellAction::PointerDragged(slider.x(), y)), None);
    }

    #[test]
    fn test_leaving_settings_clears_drag() {
        let mut sm = machine();
        sm.menu.select(2);
        sm.handle(ShellAction::Confirm);

        let slider = layout::volume_slider();
        sm.handle(ShellAction::PointerPressed(slider.x() + 10, slider.y()));
        assert!(sm.settings().drag().active);

        sm.handle(ShellAction::Escape);
        assert!(!sm.settings().drag().active);
    }

    #[test]
    fn test_back_button_returns_to_menu() {
        let mut sm = machine();
        sm.menu.select(2);
        sm.handle(ShellAction::Confirm);

        let (x, y) = centre(layout::back_button());
        assert_eq!(
            sm.handle(ShellAction::PointerPressed(x, y)),
            Some(ShellEvent::ScreenChanged(Screen::Menu))
        );
    }
}
