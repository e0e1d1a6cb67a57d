use crate::combo::KeyCombo;
use crate::platform::{HostPlatform, PlatformDetector};
use crate::traits::KeyInput;

/// Whether `event` is an Enter keystroke accepted by any of `combos`.
///
/// Non-Enter keys never match. An empty combo list never matches.
/// `CmdEnter` is resolved against the host platform.
pub fn matches_submit_key<E: KeyInput + ?Sized>(event: &E, combos: &[KeyCombo]) -> bool {
    matches_submit_key_with(event, combos, &HostPlatform)
}

/// [`matches_submit_key`] with an explicit platform detector.
pub fn matches_submit_key_with<E: KeyInput + ?Sized>(
    event: &E,
    combos: &[KeyCombo],
    platform: &dyn PlatformDetector,
) -> bool {
    if !event.key().is_enter() {
        return false;
    }
    let mods = event.modifiers();
    // First match wins; overlapping combos are harmless
    combos.iter().any(|combo| combo.matches(mods, platform))
}
