//! Display strings for the two supported languages
//!
//! Text is looked up by its English key. The table is fixed at compile
//! time. A key missing for the active language comes back unchanged, so
//! untranslated text shows up as the raw key rather than an empty label.
//! There is no cross-language fallback.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl Language {
    /// Name of the language written in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Russian => "Русский",
            Language::English => "English",
        }
    }
}

/// Resolves `key` for `language`, returning `key` itself when unknown
pub fn resolve(key: &str, language: Language) -> &str {
    let translated: Option<&str> = match language {
        Language::Russian => russian(key),
        Language::English => english(key),
    };
    translated.unwrap_or(key)
}

fn russian(key: &str) -> Option<&'static str> {
    let text = match key {
        "New Game" => "Новая игра",
        "Load Game" => "Загрузить игру",
        "Settings" => "Настройки",
        "Exit" => "Выход",
        "Language" => "Язык",
        "Back" => "Назад",
        "Game Started" => "Игра началась!",
        "Press ESC" => "Нажмите ESC, чтобы вернуться в меню",
        "Volume" => "Громкость",
        _ => return None,
    };
    Some(text)
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "New Game" => "New Game",
        "Load Game" => "Load Game",
        "Settings" => "Settings",
        "Exit" => "Exit",
        "Language" => "Language",
        "Back" => "Back",
        "Game Started" => "Game Started!",
        "Press ESC" => "Press ESC to return to menu",
        "Volume" => "Volume",
        _ => return None,
    };
    Some(text)
}
