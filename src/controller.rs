use std::fmt;

use crate::combo::KeyCombo;
use crate::matcher::matches_submit_key_with;
use crate::platform::{HostPlatform, PlatformDetector};
use crate::traits::{KeyInput, SubmitTarget};
use crate::types::{CompositionState, KeyDisposition, SubmitConfig, SubmitEvent, SubmitSource};

type SubmitCallback = Box<dyn FnMut(&mut SubmitEvent)>;
type CompositionEnterCallback = Box<dyn FnMut()>;

/// Composition-aware Enter handling for one form.
///
/// The host forwards key-down, composition-start, composition-end and
/// native submit events; the controller decides whether Enter submits.
pub struct Controller {
    state: CompositionState,
    submit_keys: Vec<KeyCombo>,
    disabled: bool,
    platform: Box<dyn PlatformDetector>,
    on_submit: Option<SubmitCallback>,
    on_composition_enter: Option<CompositionEnterCallback>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub state: CompositionState,
    pub disabled: bool,
    pub submit_keys: Vec<KeyCombo>,
}

pub struct ControllerBuilder {
    submit_keys: Vec<KeyCombo>,
    disabled: bool,
    platform: Box<dyn PlatformDetector>,
    on_submit: Option<SubmitCallback>,
    on_composition_enter: Option<CompositionEnterCallback>,
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        let config = SubmitConfig::default();
        Self {
            submit_keys: config.submit_keys,
            disabled: config.disabled,
            platform: Box::new(HostPlatform),
            on_submit: None,
            on_composition_enter: None,
        }
    }
}

impl ControllerBuilder {
    pub fn submit_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<KeyCombo>,
    {
        self.submit_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Apply the declarative options in one go.
    pub fn config(mut self, config: SubmitConfig) -> Self {
        self.submit_keys = config.submit_keys;
        self.disabled = config.disabled;
        self
    }

    /// Override host platform detection, which decides what `CmdEnter` means.
    pub fn platform(mut self, platform: impl PlatformDetector + 'static) -> Self {
        self.platform = Box::new(platform);
        self
    }

    /// Called with every submit event the host delivers to
    /// [`Controller::on_submit`].
    pub fn on_submit(mut self, callback: impl FnMut(&mut SubmitEvent) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    /// Called when Enter is pressed during IME composition.
    pub fn on_composition_enter(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_composition_enter = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Controller {
        Controller {
            state: CompositionState::Idle,
            submit_keys: self.submit_keys,
            disabled: self.disabled,
            platform: self.platform,
            on_submit: self.on_submit,
            on_composition_enter: self.on_composition_enter,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        ControllerBuilder::default().build()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("submit_keys", &self.submit_keys)
            .field("disabled", &self.disabled)
            .field("apple", &self.platform.is_apple())
            .field("on_submit", &self.on_submit.is_some())
            .field("on_composition_enter", &self.on_composition_enter.is_some())
            .finish()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::default()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            state: self.state,
            disabled: self.disabled,
            submit_keys: self.submit_keys.clone(),
        }
    }

    pub fn state(&self) -> CompositionState {
        self.state
    }

    /// Composition status as reported by the explicit boundary events.
    pub fn is_composing(&self) -> bool {
        self.state.is_composing()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn submit_keys(&self) -> &[KeyCombo] {
        &self.submit_keys
    }

    // Options may change while attached; composition state is kept.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_submit_keys<I>(&mut self, keys: I)
    where
        I: IntoIterator,
        I::Item: Into<KeyCombo>,
    {
        self.submit_keys = keys.into_iter().map(Into::into).collect();
    }

    pub fn on_composition_start(&mut self) {
        tracing::trace!(from = ?self.state, "composition start");
        self.state = CompositionState::Composing;
    }

    pub fn on_composition_end(&mut self) {
        tracing::trace!(from = ?self.state, "composition end");
        self.state = CompositionState::Idle;
    }

    pub fn on_key_down<F, E>(
        &mut self,
        form: &mut F,
        event: &mut E,
    ) -> Result<KeyDisposition, F::Error>
    where
        F: SubmitTarget + ?Sized,
        E: KeyInput + ?Sized,
    {
        if self.disabled {
            return Ok(KeyDisposition::Disabled);
        }
        if !event.key().is_enter() {
            tracing::trace!(key = ?event.key(), "ignoring non-Enter key");
            return Ok(KeyDisposition::Ignored);
        }

        // Either signal may be stale; composition must be settled before matching
        let composing = event.is_composing() || self.state.is_composing();
        if composing {
            tracing::debug!(
                native = event.is_composing(),
                state = ?self.state,
                "Enter during composition, not submitting"
            );
            if let Some(callback) = self.on_composition_enter.as_mut() {
                callback();
            }
            return Ok(KeyDisposition::CompositionEnter);
        }

        let mods = event.modifiers();
        if !matches_submit_key_with(&*event, &self.submit_keys, &*self.platform) {
            tracing::debug!(?mods, keys = ?self.submit_keys, "Enter did not match any submit combo");
            return Ok(KeyDisposition::NoMatch);
        }

        tracing::debug!(?mods, "submit combo matched");
        event.prevent_default();
        self.request_submit(form, SubmitSource::Key)?;
        Ok(KeyDisposition::Submitted)
    }

    /// Deliver a native submit event to the submit callback.
    ///
    /// No validation happens here; form contents belong to the callback.
    pub fn on_submit(&mut self, event: &mut SubmitEvent) {
        tracing::debug!(source = ?event.source, "submit event");
        if let Some(callback) = self.on_submit.as_mut() {
            callback(event);
        }
    }

    /// Request submission without a key event, e.g. from a send button.
    pub fn trigger_submit<F>(&mut self, form: &mut F) -> Result<(), F::Error>
    where
        F: SubmitTarget + ?Sized,
    {
        self.request_submit(form, SubmitSource::Programmatic)
    }

    fn request_submit<F>(&self, form: &mut F, source: SubmitSource) -> Result<(), F::Error>
    where
        F: SubmitTarget + ?Sized,
    {
        tracing::trace!(?source, "requesting form submission");
        form.request_submit(source)
    }
}
