use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;
use xpost_core::config::KeymapConfig;

use crate::input::Action;

/// Key code plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(key: KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Runtime key-to-action lookup built from the keymap config
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action of the "gg" sequence, if configured
    double_g: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut double_g = None;

        let entries = [
            (&config.quit, Action::Quit),
            (&config.move_down, Action::MoveDown),
            (&config.move_up, Action::MoveUp),
            (&config.scroll_half_down, Action::ScrollHalfPageDown),
            (&config.scroll_half_up, Action::ScrollHalfPageUp),
            (&config.scroll_page_down, Action::ScrollPageDown),
            (&config.scroll_page_up, Action::ScrollPageUp),
            (&config.jump_to_top, Action::JumpToTop),
            (&config.jump_to_bottom, Action::JumpToBottom),
            (&config.open_link, Action::OpenLink),
            (&config.close, Action::Close),
            (&config.reload, Action::Reload),
            (&config.more, Action::More),
            (&config.show_more, Action::ShowMore),
            (&config.comment, Action::Comment),
            (&config.repost, Action::Repost),
            (&config.like, Action::Like),
            (&config.bookmark, Action::Bookmark),
            (&config.share, Action::Share),
            (&config.help, Action::Help),
        ];

        for (key_str, action) in entries {
            if key_str.trim() == "gg" {
                double_g = Some(action);
                continue;
            }

            match parse_key_binding(key_str) {
                Some(binding) => {
                    if let Some(existing) = bindings.get(&binding) {
                        warn!(
                            "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                            key_str, existing, action
                        );
                    } else {
                        bindings.insert(binding, action);
                    }
                }
                None => warn!("Invalid key binding '{}' for {:?}, ignoring", key_str, action),
            }
        }

        // Always available regardless of config
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::MoveUp);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::MoveDown);
        bindings.entry(KeyBinding::simple(KeyCode::PageDown)).or_insert(Action::ScrollPageDown);
        bindings.entry(KeyBinding::simple(KeyCode::PageUp)).or_insert(Action::ScrollPageUp);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self { bindings, double_g }
    }

    /// Look up a key press. Shifted punctuation ("?") also matches its
    /// unshifted binding since terminals disagree on the modifier.
    pub fn lookup(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding).or_else(|| match binding.code {
            KeyCode::Char(c) if !c.is_ascii_alphabetic() && binding.modifiers == KeyModifiers::SHIFT => {
                self.bindings.get(&KeyBinding::simple(binding.code))
            }
            _ => None,
        })
    }

    pub fn double_g_action(&self) -> Option<&Action> {
        self.double_g.as_ref()
    }

    /// Whether a plain 'g' starts the "gg" sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.double_g.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Parse Vim-style key notation:
/// "j", "G" (Shift), "?", "<C-d>", "<S-Tab>", "<CR>", "<Esc>", "<Space>", "<F5>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        return parse_bracketed(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        Some(KeyBinding::shift(KeyCode::Char(c)))
    } else {
        Some(KeyBinding::simple(KeyCode::Char(c)))
    }
}

fn parse_bracketed(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }
    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(KeyBinding::shift);
    }
    parse_key_name(inner).map(KeyBinding::simple)
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    let lower = name.to_lowercase();
    let code = match lower.as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" | "spc" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Some(KeyCode::F(n));
                }
                return None;
            }
            let mut chars = lower.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(code)
}
