use std::fmt;
use std::str::FromStr;

use crate::key::Modifiers;
use crate::platform::PlatformDetector;

/// A key combination accepted as "submit".
///
/// Every combo is Enter plus some modifier requirement. Presets require an
/// exact modifier set: a modifier a preset does not mention must not be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ComboRepr", into = "ComboRepr")
)]
pub enum KeyCombo {
    /// Enter with no modifiers.
    #[default]
    Enter,
    /// Command+Enter on Apple platforms, Ctrl+Enter everywhere else.
    CmdEnter,
    /// Ctrl+Enter on every platform.
    CtrlEnter,
    /// Shift+Enter.
    ShiftEnter,
    /// Alt+Enter (Option+Enter on Apple keyboards).
    AltEnter,
    /// Enter with per-modifier requirements.
    Custom(CustomCombo),
}

/// Enter with optional per-modifier requirements.
///
/// `None` means "don't care"; `Some(v)` requires the event's flag to be
/// exactly `v`. A combo with every field `None` accepts any Enter keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CustomCombo {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ctrl: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub meta: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub shift: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub alt: Option<bool>,
}

impl CustomCombo {
    /// A combo that constrains no modifier.
    pub const ANY: CustomCombo = CustomCombo {
        ctrl: None,
        meta: None,
        shift: None,
        alt: None,
    };

    pub fn new() -> Self {
        Self::ANY
    }

    pub fn ctrl(mut self, held: bool) -> Self {
        self.ctrl = Some(held);
        self
    }

    pub fn meta(mut self, held: bool) -> Self {
        self.meta = Some(held);
        self
    }

    pub fn shift(mut self, held: bool) -> Self {
        self.shift = Some(held);
        self
    }

    pub fn alt(mut self, held: bool) -> Self {
        self.alt = Some(held);
        self
    }

    pub fn matches(&self, mods: Modifiers) -> bool {
        fn field_ok(expected: Option<bool>, actual: bool) -> bool {
            expected.is_none_or(|want| want == actual)
        }

        field_ok(self.ctrl, mods.ctrl())
            && field_ok(self.meta, mods.meta())
            && field_ok(self.shift, mods.shift())
            && field_ok(self.alt, mods.alt())
    }
}

impl From<CustomCombo> for KeyCombo {
    fn from(combo: CustomCombo) -> Self {
        KeyCombo::Custom(combo)
    }
}

impl KeyCombo {
    /// The five presets, in declaration order.
    pub const PRESETS: [KeyCombo; 5] = [
        KeyCombo::Enter,
        KeyCombo::CmdEnter,
        KeyCombo::CtrlEnter,
        KeyCombo::ShiftEnter,
        KeyCombo::AltEnter,
    ];

    /// Whether an Enter keystroke carrying `mods` satisfies this combo.
    ///
    /// `CmdEnter` asks `platform` on every call rather than resolving once
    /// at configuration time.
    pub fn matches(&self, mods: Modifiers, platform: &dyn PlatformDetector) -> bool {
        match self {
            KeyCombo::Enter => mods.is_empty(),
            KeyCombo::CmdEnter => {
                if platform.is_apple() {
                    mods == Modifiers::META
                } else {
                    mods == Modifiers::CTRL
                }
            }
            KeyCombo::CtrlEnter => mods == Modifiers::CTRL,
            KeyCombo::ShiftEnter => mods == Modifiers::SHIFT,
            KeyCombo::AltEnter => mods == Modifiers::ALT,
            KeyCombo::Custom(custom) => custom.matches(mods),
        }
    }

    /// The configuration name of a preset, `None` for custom combos.
    pub fn preset_name(&self) -> Option<&'static str> {
        match self {
            KeyCombo::Enter => Some("Enter"),
            KeyCombo::CmdEnter => Some("Cmd+Enter"),
            KeyCombo::CtrlEnter => Some("Ctrl+Enter"),
            KeyCombo::ShiftEnter => Some("Shift+Enter"),
            KeyCombo::AltEnter => Some("Alt+Enter"),
            KeyCombo::Custom(_) => None,
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCombo::Custom(custom) => write!(f, "{custom}"),
            preset => f.write_str(preset.preset_name().unwrap_or_default()),
        }
    }
}

impl fmt::Display for CustomCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("ctrl", self.ctrl),
            ("meta", self.meta),
            ("shift", self.shift),
            ("alt", self.alt),
        ];
        let mut specified = fields
            .iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .peekable();

        f.write_str("Custom(")?;
        if specified.peek().is_none() {
            f.write_str("any")?;
        }
        let mut first = true;
        for (name, value) in specified {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        f.write_str(")")
    }
}

/// Error returned when a combo name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseComboError {
    #[error("empty key combo")]
    Empty,
    #[error("unknown key combo `{0}` (expected Enter, Cmd+Enter, Ctrl+Enter, Shift+Enter or Alt+Enter)")]
    UnknownCombo(String),
}

impl FromStr for KeyCombo {
    type Err = ParseComboError;

    /// Parse a preset name such as `"Cmd+Enter"`.
    ///
    /// Case-insensitive; whitespace around `+` is ignored. `Meta`, `Mod`
    /// and `Command` are accepted for `Cmd`, `Control` for `Ctrl`, and
    /// `Option` for `Alt`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseComboError::Empty);
        }

        let parts: Vec<String> = trimmed
            .split('+')
            .map(|part| part.trim().to_ascii_lowercase())
            .collect();
        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();

        let combo = match parts.as_slice() {
            ["enter"] | ["return"] => KeyCombo::Enter,
            [modifier, "enter" | "return"] => match *modifier {
                "cmd" | "command" | "meta" | "mod" => KeyCombo::CmdEnter,
                "ctrl" | "control" => KeyCombo::CtrlEnter,
                "shift" => KeyCombo::ShiftEnter,
                "alt" | "option" => KeyCombo::AltEnter,
                _ => return Err(ParseComboError::UnknownCombo(trimmed.to_string())),
            },
            _ => return Err(ParseComboError::UnknownCombo(trimmed.to_string())),
        };
        Ok(combo)
    }
}

// Presets travel as their names, custom combos as a map of optional flags.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ComboRepr {
    Name(String),
    Custom(CustomCombo),
}

#[cfg(feature = "serde")]
impl TryFrom<ComboRepr> for KeyCombo {
    type Error = ParseComboError;

    fn try_from(repr: ComboRepr) -> Result<Self, Self::Error> {
        match repr {
            ComboRepr::Name(name) => name.parse(),
            ComboRepr::Custom(custom) => Ok(KeyCombo::Custom(custom)),
        }
    }
}

#[cfg(feature = "serde")]
impl From<KeyCombo> for ComboRepr {
    fn from(combo: KeyCombo) -> Self {
        match combo {
            KeyCombo::Custom(custom) => ComboRepr::Custom(custom),
            preset => ComboRepr::Name(preset.to_string()),
        }
    }
}
