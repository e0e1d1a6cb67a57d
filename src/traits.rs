use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::types::SubmitSource;

/// Read-only view of a host keyboard event.
///
/// The controller depends only on this capability, never on a concrete
/// toolkit event type.
pub trait KeyInput {
    fn key(&self) -> KeyCode;
    fn modifiers(&self) -> Modifiers;

    // Native composing indicator; may be stale or missing on some hosts
    fn is_composing(&self) -> bool;

    // Suppress the host's default handling of this keystroke.
    // Hosts without such a concept act on the returned disposition instead.
    fn prevent_default(&mut self) {}
}

impl KeyInput for KeyEvent {
    fn key(&self) -> KeyCode {
        self.code
    }

    fn modifiers(&self) -> Modifiers {
        self.mods
    }

    fn is_composing(&self) -> bool {
        self.composing
    }
}

/// The host form's native submission primitive (`requestSubmit()` in
/// browsers).
///
/// Implementations should run the same validation and dispatch the same
/// submit event as any other submission, and eventually deliver it to
/// [`Controller::on_submit`](crate::controller::Controller::on_submit).
pub trait SubmitTarget {
    type Error;

    fn request_submit(&mut self, source: SubmitSource) -> Result<(), Self::Error>;
}

impl<T: SubmitTarget + ?Sized> SubmitTarget for &mut T {
    type Error = T::Error;

    fn request_submit(&mut self, source: SubmitSource) -> Result<(), Self::Error> {
        (**self).request_submit(source)
    }
}
