//! IME-aware Enter-to-submit decisions.
//!
//! While an Input Method Editor is composing text, Enter confirms the
//! conversion candidate. Once composition ends the same key should submit the
//! form. [`Controller`] tracks composition and decides, for every key-down,
//! whether the configured [`KeyCombo`]s ask for a submission.

pub mod combo;
pub mod controller;
pub mod key;
pub mod matcher;
pub mod platform;
pub mod traits;
pub mod types;

pub use crate::combo::{CustomCombo, KeyCombo, ParseComboError};
pub use crate::controller::{Controller, ControllerBuilder, ControllerSnapshot};
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::matcher::{matches_submit_key, matches_submit_key_with};
pub use crate::platform::{
    HostPlatform, Platform, PlatformDetector, host_platform_name, is_apple_platform,
    is_apple_platform_name,
};
pub use crate::traits::{KeyInput, SubmitTarget};
pub use crate::types::{CompositionState, KeyDisposition, SubmitConfig, SubmitEvent, SubmitSource};
