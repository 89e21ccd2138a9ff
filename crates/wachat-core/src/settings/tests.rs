use super::*;
use crate::store::MemorySettingsStore;

#[test]
fn test_defaults_match_documented_values() {
    let s = Settings::default();
    assert!(s.enabled);
    assert_eq!(s.country_code, "+1");
    assert_eq!(s.phone_number, "");
    assert_eq!(
        s.message_template,
        "Hi! I'm interested in: {product_name} - {product_url}"
    );
    assert_eq!(s.button_text, "WhatsApp");
    assert!(s.floating_enabled);
    assert_eq!(s.button_position, ButtonPosition::AfterAddToCart);
    assert_eq!(s.button_position.priority(), 35);
}

#[test]
fn test_from_empty_store_is_default() {
    let store = MemorySettingsStore::new();
    assert_eq!(Settings::from_store(&store), Settings::default());
}

#[test]
fn test_from_store_reads_values() {
    let store = MemorySettingsStore::from_iter([
        ("enabled", "yes"),
        ("country_code", "+44"),
        ("phone_number", "20 7946 0958"),
        ("message_template", "About {product_name}"),
        ("button_text", "Chat"),
        ("floating_enabled", "no"),
        ("button_position", "15"),
    ]);
    let s = Settings::from_store(&store);
    assert!(s.enabled);
    assert_eq!(s.country_code, "+44");
    assert_eq!(s.phone_number, "20 7946 0958");
    assert_eq!(s.message_template, "About {product_name}");
    assert_eq!(s.button_text, "Chat");
    assert!(!s.floating_enabled);
    assert_eq!(s.button_position, ButtonPosition::AfterPrice);
}

#[test]
fn test_present_but_empty_flag_is_off() {
    // An unchecked checkbox saves an empty value rather than deleting the key.
    let store = MemorySettingsStore::from_iter([("enabled", ""), ("floating_enabled", "")]);
    let s = Settings::from_store(&store);
    assert!(!s.enabled);
    assert!(!s.floating_enabled);
}

#[test]
fn test_parse_flag_variants() {
    for on in ["yes", "YES", "true", "1", "on", " yes "] {
        assert!(parse_flag(on), "{on:?} should be on");
    }
    for off in ["no", "false", "0", "", "off", "maybe"] {
        assert!(!parse_flag(off), "{off:?} should be off");
    }
}

#[test]
fn test_bad_button_position_falls_back() {
    let store = MemorySettingsStore::from_iter([("button_position", "after-cart")]);
    let s = Settings::from_store(&store);
    assert_eq!(s.button_position, ButtonPosition::AfterAddToCart);
}

#[test]
fn test_custom_button_position_is_kept() {
    let store = MemorySettingsStore::from_iter([("button_position", "99")]);
    let s = Settings::from_store(&store);
    assert_eq!(s.button_position, ButtonPosition::Custom(99));
    assert_eq!(s.button_position.priority(), 99);
}

#[test]
fn test_write_to_round_trips_through_store() {
    let settings = Settings {
        enabled: false,
        country_code: "+971".to_string(),
        phone_number: "50 123 4567".to_string(),
        message_template: "{product_name} for {product_price}".to_string(),
        button_text: "Ask us".to_string(),
        floating_enabled: false,
        button_position: ButtonPosition::AfterMeta,
    };
    let mut store = MemorySettingsStore::new();
    settings.write_to(&mut store);

    assert_eq!(store.get("enabled").as_deref(), Some("no"));
    assert_eq!(store.get("button_position").as_deref(), Some("45"));
    assert_eq!(Settings::from_store(&store), settings);
}

#[test]
fn test_setting_key_parse() {
    assert_eq!(SettingKey::parse("country_code"), Some(SettingKey::CountryCode));
    assert_eq!(SettingKey::parse("countryCode"), Some(SettingKey::CountryCode));
    assert_eq!(SettingKey::parse("message-template"), Some(SettingKey::MessageTemplate));
    assert_eq!(SettingKey::parse("nope"), None);
    for key in SettingKey::ALL {
        assert_eq!(SettingKey::parse(key.as_str()), Some(key));
    }
}

#[test]
fn test_setting_key_default_value() {
    assert_eq!(SettingKey::Enabled.default_value(), "yes");
    assert_eq!(SettingKey::ButtonPosition.default_value(), "35");
    assert_eq!(SettingKey::PhoneNumber.default_value(), "");
}

#[test]
fn test_button_position_named_round_trip() {
    for pos in ButtonPosition::NAMED {
        assert_eq!(ButtonPosition::from_priority(pos.priority()), pos);
        assert!(!pos.label().is_empty());
    }
}

#[test]
fn test_button_position_custom_priority_kept() {
    let pos = ButtonPosition::from_priority(99);
    assert_eq!(pos, ButtonPosition::Custom(99));
    assert_eq!(pos.priority(), 99);
    assert_eq!(pos.label(), "Custom priority");
}

#[test]
fn test_validate_clean_settings() {
    let s = Settings {
        phone_number: "555-123-4567".to_string(),
        ..Settings::default()
    };
    assert!(s.validate().is_empty(), "got {:?}", s.validate());
}

#[test]
fn test_validate_reports_issues() {
    let s = Settings {
        country_code: "1".to_string(),
        phone_number: "555 CALL NOW".to_string(),
        message_template: "Hello there".to_string(),
        button_position: ButtonPosition::Custom(7),
        ..Settings::default()
    };
    let issues = s.validate();
    assert!(issues.contains(&SettingsIssue::CountryCodeFormat("1".to_string())));
    assert!(issues.contains(&SettingsIssue::PhoneCharacters("CALLNOW".to_string())));
    assert!(issues.contains(&SettingsIssue::NoPlaceholders));
    assert!(issues.contains(&SettingsIssue::NonStandardPosition(7)));
}

#[test]
fn test_validate_country_code_bounds() {
    for good in ["+1", "+44", "+971", "+1234"] {
        let s = Settings {
            country_code: good.to_string(),
            phone_number: "1".to_string(),
            ..Settings::default()
        };
        assert!(s.validate().is_empty(), "{good} should be clean");
    }
    for bad in ["+", "+12345", "44", "+4a", ""] {
        let s = Settings {
            country_code: bad.to_string(),
            phone_number: "1".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            s.validate(),
            vec![SettingsIssue::CountryCodeFormat(bad.to_string())]
        );
    }
}

#[test]
fn test_validate_missing_phone() {
    let issues = Settings::default().validate();
    assert_eq!(issues, vec![SettingsIssue::MissingPhone]);
    assert!(issues[0].to_string().contains("no phone number"));
}
