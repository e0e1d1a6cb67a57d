use crate::combo::KeyCombo;

/// The IME composition state tracked by the controller.
///
/// Hosts report composition boundaries explicitly; the controller never
/// infers them from key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionState {
    /// No composition in progress. Enter may submit.
    #[default]
    Idle,
    /// The IME holds uncommitted text. Enter confirms a candidate.
    Composing,
}

impl CompositionState {
    pub fn is_composing(self) -> bool {
        self == CompositionState::Composing
    }
}

/// What the controller decided for a single key-down event.
///
/// Returned by [`Controller::on_key_down`] so that hosts whose toolkit has
/// no `preventDefault` concept can still act on the decision.
///
/// [`Controller::on_key_down`]: crate::controller::Controller::on_key_down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The controller is disabled; the event was not inspected.
    Disabled,
    /// Not an Enter keystroke.
    Ignored,
    /// Enter pressed while composing. The IME owns this keystroke.
    CompositionEnter,
    /// Enter outside composition, but no configured combo accepted it.
    NoMatch,
    /// A combo matched; submission was requested and the default action
    /// prevented.
    Submitted,
}

impl KeyDisposition {
    /// Whether the host should suppress the key's default action.
    pub fn prevents_default(self) -> bool {
        self == KeyDisposition::Submitted
    }
}

/// What triggered a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitSource {
    /// A key-down event matched a submit combo.
    Key,
    /// [`Controller::trigger_submit`] was called directly, e.g. by a button.
    ///
    /// [`Controller::trigger_submit`]: crate::controller::Controller::trigger_submit
    Programmatic,
    /// The host's own form submission (a native submit button or similar).
    Native,
}

/// A native submit event delivered to the controller by the host.
///
/// The submit callback may call [`SubmitEvent::prevent_default`] to keep
/// the host from running its built-in submission (page navigation, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    /// What triggered the submission.
    pub source: SubmitSource,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(source: SubmitSource) -> Self {
        Self {
            source,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Declarative part of the controller options.
///
/// Callbacks are not part of this struct; they are attached through
/// [`ControllerBuilder`](crate::controller::ControllerBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SubmitConfig {
    /// Accepted submit combos. Defaults to plain Enter.
    pub submit_keys: Vec<KeyCombo>,
    /// Bypass every key-down decision.
    pub disabled: bool,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            submit_keys: vec![KeyCombo::Enter],
            disabled: false,
        }
    }
}
