/// The identity of a pressed key, reduced to what a submit decision needs.
///
/// Toolkit key events are folded into this enum by the host. Only
/// [`KeyCode::Enter`] ever takes part in a submit decision; every other key
/// is carried so hosts can forward all key-downs without filtering first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key.
    Char(char),
    /// The Enter/Return key. Confirms an IME candidate while composing,
    /// submits the form otherwise.
    Enter,
    /// The Escape key.
    Esc,
    /// The Backspace key.
    Backspace,
    /// The Tab key.
    Tab,
    /// Any other named key (arrows, function keys, ...).
    Other,
}

impl KeyCode {
    /// Map a DOM-style key identity string (`KeyboardEvent.key`) to a code.
    ///
    /// `"Enter"` is matched exactly; single characters become
    /// [`KeyCode::Char`]. Unrecognized names map to [`KeyCode::Other`].
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Enter" => KeyCode::Enter,
            "Escape" | "Esc" => KeyCode::Esc,
            "Backspace" => KeyCode::Backspace,
            "Tab" => KeyCode::Tab,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => KeyCode::Other,
                }
            }
        }
    }

    pub fn is_enter(self) -> bool {
        self == KeyCode::Enter
    }
}

bitflags::bitflags! {
    /// Modifier keys held together with Enter.
    ///
    /// Submit combos compare the whole set, so an extra modifier turns a
    /// preset match into a miss. `META` is the Command key on Apple
    /// keyboards and the Windows/Super key elsewhere.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Build a modifier set from four independent booleans, in the order
    /// browsers expose them (`ctrlKey`, `metaKey`, `shiftKey`, `altKey`).
    pub fn from_flags(ctrl: bool, meta: bool, shift: bool, alt: bool) -> Self {
        let mut mods = Modifiers::empty();
        mods.set(Modifiers::CTRL, ctrl);
        mods.set(Modifiers::META, meta);
        mods.set(Modifiers::SHIFT, shift);
        mods.set(Modifiers::ALT, alt);
        mods
    }

    pub fn ctrl(self) -> bool {
        self.contains(Modifiers::CTRL)
    }

    pub fn meta(self) -> bool {
        self.contains(Modifiers::META)
    }

    pub fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    pub fn alt(self) -> bool {
        self.contains(Modifiers::ALT)
    }
}

/// A key press event with modifiers and the host's composing flag.
///
/// This is the crate's own [`KeyInput`](crate::traits::KeyInput)
/// implementation. Hosts may either convert their events into it or
/// implement `KeyInput` directly on their own event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
    /// Whether the host reports this keystroke as part of an active IME
    /// composition (`KeyboardEvent.isComposing` in browsers).
    pub composing: bool,
}

impl KeyEvent {
    /// A plain key press outside of composition.
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self {
            code,
            mods,
            composing: false,
        }
    }

    /// Enter with the given modifiers, outside of composition.
    pub fn enter(mods: Modifiers) -> Self {
        Self::new(KeyCode::Enter, mods)
    }

    /// Mark the event with the host's native composing flag.
    pub fn composing(mut self, composing: bool) -> Self {
        self.composing = composing;
        self
    }
}
