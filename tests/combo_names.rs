use submit_jp::{
    CustomCombo, KeyCode, KeyCombo, ParseComboError, host_platform_name, is_apple_platform,
    is_apple_platform_name,
};

#[test]
fn preset_names_parse() {
    assert_eq!("Enter".parse::<KeyCombo>(), Ok(KeyCombo::Enter));
    assert_eq!("Cmd+Enter".parse::<KeyCombo>(), Ok(KeyCombo::CmdEnter));
    assert_eq!("Ctrl+Enter".parse::<KeyCombo>(), Ok(KeyCombo::CtrlEnter));
    assert_eq!("Shift+Enter".parse::<KeyCombo>(), Ok(KeyCombo::ShiftEnter));
    assert_eq!("Alt+Enter".parse::<KeyCombo>(), Ok(KeyCombo::AltEnter));
}

#[test]
fn parsing_is_lenient_about_case_spacing_and_aliases() {
    assert_eq!("  ctrl + enter ".parse::<KeyCombo>(), Ok(KeyCombo::CtrlEnter));
    assert_eq!("META+ENTER".parse::<KeyCombo>(), Ok(KeyCombo::CmdEnter));
    assert_eq!("Mod+Enter".parse::<KeyCombo>(), Ok(KeyCombo::CmdEnter));
    assert_eq!("Control+Return".parse::<KeyCombo>(), Ok(KeyCombo::CtrlEnter));
    assert_eq!("Option+Enter".parse::<KeyCombo>(), Ok(KeyCombo::AltEnter));
}

#[test]
fn unknown_names_are_rejected() {
    assert_eq!("".parse::<KeyCombo>(), Err(ParseComboError::Empty));
    assert_eq!("   ".parse::<KeyCombo>(), Err(ParseComboError::Empty));
    assert_eq!(
        "Ctrl+Shift+Enter".parse::<KeyCombo>(),
        Err(ParseComboError::UnknownCombo("Ctrl+Shift+Enter".to_string()))
    );
    assert_eq!(
        "Ctrl+Space".parse::<KeyCombo>(),
        Err(ParseComboError::UnknownCombo("Ctrl+Space".to_string()))
    );
    assert_eq!(
        "Hyper+Enter".parse::<KeyCombo>(),
        Err(ParseComboError::UnknownCombo("Hyper+Enter".to_string()))
    );
}

#[test]
fn error_messages_name_the_input() {
    let err = "Super+Enter".parse::<KeyCombo>().unwrap_err();
    assert!(err.to_string().contains("`Super+Enter`"));
    assert_eq!(ParseComboError::Empty.to_string(), "empty key combo");
}

#[test]
fn presets_display_as_their_names() {
    for combo in KeyCombo::PRESETS {
        let name = combo.to_string();
        assert_eq!(Some(name.as_str()), combo.preset_name());
        assert_eq!(name.parse::<KeyCombo>(), Ok(combo));
    }
}

#[test]
fn custom_combos_display_specified_fields() {
    assert_eq!(KeyCombo::Custom(CustomCombo::ANY).to_string(), "Custom(any)");
    assert_eq!(
        KeyCombo::from(CustomCombo::new().ctrl(true).alt(false)).to_string(),
        "Custom(ctrl=true, alt=false)"
    );
    assert_eq!(KeyCombo::Custom(CustomCombo::ANY).preset_name(), None);
}

#[test]
fn default_combo_is_plain_enter() {
    assert_eq!(KeyCombo::default(), KeyCombo::Enter);
}

#[test]
fn key_names_map_to_codes() {
    assert_eq!(KeyCode::from_key_name("Enter"), KeyCode::Enter);
    assert_eq!(KeyCode::from_key_name("Escape"), KeyCode::Esc);
    assert_eq!(KeyCode::from_key_name("Backspace"), KeyCode::Backspace);
    assert_eq!(KeyCode::from_key_name("Tab"), KeyCode::Tab);
    assert_eq!(KeyCode::from_key_name("a"), KeyCode::Char('a'));
    assert_eq!(KeyCode::from_key_name("あ"), KeyCode::Char('あ'));
    assert_eq!(KeyCode::from_key_name("Process"), KeyCode::Other);
    assert_eq!(KeyCode::from_key_name("enter"), KeyCode::Other);
    assert_eq!(KeyCode::from_key_name(""), KeyCode::Other);
}

#[test]
fn apple_platform_names() {
    for name in ["MacIntel", "Macintosh", "iPhone", "iPad", "iPod touch", "macos", "IPHONE"] {
        assert!(is_apple_platform_name(name), "{name}");
    }
    for name in ["Win32", "Linux x86_64", "Linux armv7l", "FreeBSD", ""] {
        assert!(!is_apple_platform_name(name), "{name}");
    }
}

#[test]
fn host_detection_is_stable() {
    let first = is_apple_platform();
    assert_eq!(is_apple_platform(), first);
    assert_eq!(
        first,
        host_platform_name().is_some_and(is_apple_platform_name)
    );
    if cfg!(target_os = "macos") {
        assert!(first);
    }
    if cfg!(target_os = "linux") || cfg!(target_os = "windows") {
        assert!(!first);
    }
}
