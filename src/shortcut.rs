use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Named user actions a key can be bound to. Closed set: adding a variant
/// forces [`default_binding`] to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutKey {
    ShowWord,
    EditArticle,
    Next,
    Replay,
    Previous,
    ToggleSimple,
    ToggleCollect,
    NextChapter,
    PreviousChapter,
    RepeatChapter,
    /// Deprecated, kept for configs that still reference it.
    DictationChapter,
    PlayWordPronunciation,
    ToggleShowTranslate,
    ToggleDictation,
    OpenSetting,
    /// Deprecated, kept for configs that still reference it.
    OpenDictDetail,
    ToggleTheme,
    ToggleConciseMode,
    TogglePanel,
}

impl ShortcutKey {
    pub const ALL: [ShortcutKey; 19] = [
        ShortcutKey::ShowWord,
        ShortcutKey::EditArticle,
        ShortcutKey::Next,
        ShortcutKey::Replay,
        ShortcutKey::Previous,
        ShortcutKey::ToggleSimple,
        ShortcutKey::ToggleCollect,
        ShortcutKey::NextChapter,
        ShortcutKey::PreviousChapter,
        ShortcutKey::RepeatChapter,
        ShortcutKey::DictationChapter,
        ShortcutKey::PlayWordPronunciation,
        ShortcutKey::ToggleShowTranslate,
        ShortcutKey::ToggleDictation,
        ShortcutKey::OpenSetting,
        ShortcutKey::OpenDictDetail,
        ShortcutKey::ToggleTheme,
        ShortcutKey::ToggleConciseMode,
        ShortcutKey::TogglePanel,
    ];

    pub fn is_deprecated(&self) -> bool {
        matches!(self, ShortcutKey::DictationChapter | ShortcutKey::OpenDictDetail)
    }
}

/// Default key combination for an action. Single source of truth for initial
/// keybindings; user configuration overrides these elsewhere.
pub fn default_binding(key: ShortcutKey) -> &'static str {
    match key {
        ShortcutKey::EditArticle => "Ctrl+E",
        ShortcutKey::ShowWord => "Escape",
        ShortcutKey::Previous => "Alt+⬅",
        ShortcutKey::Next => "Tab",
        ShortcutKey::Replay => "Tab",
        ShortcutKey::ToggleSimple => "`",
        ShortcutKey::ToggleCollect => "Enter",
        ShortcutKey::PreviousChapter => "Ctrl+⬅",
        ShortcutKey::NextChapter => "Ctrl+➡",
        ShortcutKey::RepeatChapter => "Ctrl+Enter",
        ShortcutKey::DictationChapter => "Alt+Enter",
        ShortcutKey::PlayWordPronunciation => "Ctrl+P",
        ShortcutKey::ToggleShowTranslate => "Ctrl+Z",
        ShortcutKey::ToggleDictation => "Ctrl+I",
        ShortcutKey::OpenSetting => "Ctrl+S",
        ShortcutKey::OpenDictDetail => "Ctrl+J",
        ShortcutKey::ToggleTheme => "Ctrl+Q",
        ShortcutKey::ToggleConciseMode => "Ctrl+M",
        ShortcutKey::TogglePanel => "Ctrl+L",
    }
}

/// The full action → key-combination table.
pub fn default_shortcut_key_map() -> HashMap<ShortcutKey, &'static str> {
    ShortcutKey::ALL.iter().map(|key| (*key, default_binding(*key))).collect()
}

/// Pre-rework binding table, kept for migrating old configurations.
pub const SHORTCUT_KEY_MAP: [(&str, &str); 4] =
    [("Show", "Escape"), ("Ignore", "Tab"), ("Remove", "`"), ("Collect", "Enter")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_collect_defaults_to_enter() {
        assert_eq!(default_binding(ShortcutKey::ToggleCollect), "Enter");
    }

    #[test]
    fn every_action_has_a_default_binding() {
        let map = default_shortcut_key_map();
        for key in ShortcutKey::ALL {
            if !key.is_deprecated() {
                assert!(!map[&key].is_empty(), "missing binding for {key:?}");
            }
        }
        assert_eq!(map.len(), ShortcutKey::ALL.len());
    }

    #[test]
    fn actions_serialize_by_name() {
        assert_eq!(serde_json::to_string(&ShortcutKey::ShowWord).unwrap(), "\"ShowWord\"");
        let parsed: ShortcutKey = serde_json::from_str("\"TogglePanel\"").unwrap();
        assert_eq!(parsed, ShortcutKey::TogglePanel);
    }
}
