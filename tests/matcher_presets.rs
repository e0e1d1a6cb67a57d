use submit_jp::{
    CustomCombo, KeyCode, KeyCombo, KeyEvent, Modifiers, Platform, matches_submit_key,
    matches_submit_key_with,
};

fn all_modifier_sets() -> impl Iterator<Item = Modifiers> {
    (0u8..16).map(Modifiers::from_bits_truncate)
}

fn enter(mods: Modifiers) -> KeyEvent {
    KeyEvent::enter(mods)
}

#[test]
fn non_enter_keys_never_match() {
    let any = [KeyCombo::Custom(CustomCombo::ANY)];
    for code in [
        KeyCode::Char('a'),
        KeyCode::Esc,
        KeyCode::Backspace,
        KeyCode::Tab,
        KeyCode::Other,
    ] {
        for mods in all_modifier_sets() {
            let event = KeyEvent::new(code, mods);
            assert!(!matches_submit_key(&event, &any));
            assert!(!matches_submit_key(&event, &KeyCombo::PRESETS));
        }
    }
}

#[test]
fn enter_preset_requires_no_modifiers() {
    for mods in all_modifier_sets() {
        assert_eq!(
            matches_submit_key(&enter(mods), &[KeyCombo::Enter]),
            mods.is_empty(),
            "mods = {mods:?}"
        );
    }
}

#[test]
fn single_modifier_presets_are_exact() {
    let cases = [
        (KeyCombo::CtrlEnter, Modifiers::CTRL),
        (KeyCombo::ShiftEnter, Modifiers::SHIFT),
        (KeyCombo::AltEnter, Modifiers::ALT),
    ];
    for (combo, required) in cases {
        for mods in all_modifier_sets() {
            assert_eq!(
                matches_submit_key(&enter(mods), &[combo]),
                mods == required,
                "{combo} with {mods:?}"
            );
        }
    }
}

#[test]
fn cmd_enter_uses_meta_on_apple() {
    for mods in all_modifier_sets() {
        assert_eq!(
            matches_submit_key_with(&enter(mods), &[KeyCombo::CmdEnter], &Platform::Apple),
            mods == Modifiers::META,
            "mods = {mods:?}"
        );
    }
}

#[test]
fn cmd_enter_uses_ctrl_elsewhere() {
    for mods in all_modifier_sets() {
        assert_eq!(
            matches_submit_key_with(&enter(mods), &[KeyCombo::CmdEnter], &Platform::Other),
            mods == Modifiers::CTRL,
            "mods = {mods:?}"
        );
    }
}

#[test]
fn cmd_enter_accepts_platform_strings() {
    let cmd = [KeyCombo::CmdEnter];
    let meta_enter = enter(Modifiers::META);
    let ctrl_enter = enter(Modifiers::CTRL);

    assert!(matches_submit_key_with(&meta_enter, &cmd, &"MacIntel"));
    assert!(matches_submit_key_with(&meta_enter, &cmd, &"iPad"));
    assert!(!matches_submit_key_with(&ctrl_enter, &cmd, &"MacIntel"));

    assert!(matches_submit_key_with(&ctrl_enter, &cmd, &"Win32"));
    assert!(matches_submit_key_with(&ctrl_enter, &cmd, &""));
    assert!(!matches_submit_key_with(&meta_enter, &cmd, &"Linux x86_64"));
}

#[test]
fn custom_combo_without_constraints_matches_every_enter() {
    let combos = [KeyCombo::Custom(CustomCombo::new())];
    for mods in all_modifier_sets() {
        assert!(matches_submit_key(&enter(mods), &combos), "mods = {mods:?}");
    }
}

#[test]
fn custom_combo_constrains_only_specified_fields() {
    // ctrl must be held, shift must not; meta and alt are free
    let combo: KeyCombo = CustomCombo::new().ctrl(true).shift(false).into();
    for mods in all_modifier_sets() {
        let expected = mods.ctrl() && !mods.shift();
        assert_eq!(
            matches_submit_key(&enter(mods), &[combo]),
            expected,
            "mods = {mods:?}"
        );
    }
}

#[test]
fn custom_combo_can_require_modifier_absent() {
    let combo: KeyCombo = CustomCombo::new().alt(false).into();
    assert!(matches_submit_key(&enter(Modifiers::empty()), &[combo]));
    assert!(matches_submit_key(
        &enter(Modifiers::CTRL | Modifiers::SHIFT),
        &[combo]
    ));
    assert!(!matches_submit_key(&enter(Modifiers::ALT), &[combo]));
}

#[test]
fn empty_combo_list_never_matches() {
    for mods in all_modifier_sets() {
        assert!(!matches_submit_key(&enter(mods), &[]));
    }
}

#[test]
fn combo_list_is_a_union() {
    let combos = [KeyCombo::ShiftEnter, KeyCombo::CtrlEnter];
    assert!(matches_submit_key(&enter(Modifiers::SHIFT), &combos));
    assert!(matches_submit_key(&enter(Modifiers::CTRL), &combos));
    assert!(!matches_submit_key(&enter(Modifiers::empty()), &combos));
    assert!(!matches_submit_key(
        &enter(Modifiers::CTRL | Modifiers::SHIFT),
        &combos
    ));
}

#[test]
fn overlapping_combos_are_harmless() {
    let combos = [
        KeyCombo::CtrlEnter,
        KeyCombo::Custom(CustomCombo::new().ctrl(true)),
        KeyCombo::CtrlEnter,
    ];
    assert!(matches_submit_key(&enter(Modifiers::CTRL), &combos));
    assert!(!matches_submit_key(&enter(Modifiers::empty()), &combos));
}

#[test]
fn native_composing_flag_does_not_affect_matching() {
    // The matcher is composition-agnostic; gating is the controller's job
    let event = enter(Modifiers::empty()).composing(true);
    assert!(matches_submit_key(&event, &[KeyCombo::Enter]));
}
