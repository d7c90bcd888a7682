use dropdown::config::{DEFAULT_MENU_CLASS, DEFAULT_SHOW_CLASS, DEFAULT_TRIGGER_ID};
use dropdown::{Binding, DropdownConfig, DropdownError, ExclusivePolicy};

#[test]
fn test_default_binds_navbar_trigger() {
    let config = DropdownConfig::default();
    assert_eq!(config.bindings, vec![Binding::sibling(DEFAULT_TRIGGER_ID)]);
    assert_eq!(config.menu_class, DEFAULT_MENU_CLASS);
    assert_eq!(config.show_class, DEFAULT_SHOW_CLASS);
    assert_eq!(config.exclusive, ExclusivePolicy::Document);
    assert!(config.validate().is_ok());
}

#[test]
fn test_new_has_no_bindings() {
    assert!(DropdownConfig::new().bindings.is_empty());
}

#[test]
fn test_builder() {
    let config = DropdownConfig::new()
        .trigger("a")
        .trigger_with_menu("b", "b-menu")
        .show_class("open")
        .exclusive(ExclusivePolicy::Registered);

    assert_eq!(
        config.bindings,
        vec![Binding::sibling("a"), Binding::explicit("b", "b-menu")]
    );
    assert_eq!(config.show_class, "open");
    assert_eq!(config.exclusive, ExclusivePolicy::Registered);
}

#[test]
fn test_from_json_full() {
    let config = DropdownConfig::from_json(
        r#"{
            "bindings": [
                { "trigger": "navbarDropdown" },
                { "trigger": "userDropdown", "menu": "user-menu" }
            ],
            "menu-class": "menu",
            "show-class": "open",
            "exclusive": "registered"
        }"#,
    )
    .expect("valid json");

    assert_eq!(
        config.bindings,
        vec![
            Binding::sibling("navbarDropdown"),
            Binding::explicit("userDropdown", "user-menu"),
        ]
    );
    assert_eq!(config.menu_class, "menu");
    assert_eq!(config.show_class, "open");
    assert_eq!(config.exclusive, ExclusivePolicy::Registered);
}

#[test]
fn test_from_json_fills_defaults() {
    let config = DropdownConfig::from_json(r#"{ "show-class": "visible" }"#).expect("valid json");
    assert_eq!(config.bindings, DropdownConfig::default().bindings);
    assert_eq!(config.menu_class, DEFAULT_MENU_CLASS);
    assert_eq!(config.show_class, "visible");
}

#[test]
fn test_from_json_empty_object_is_default() {
    assert_eq!(DropdownConfig::from_json("{}").expect("valid json"), DropdownConfig::default());
}

#[test]
fn test_page_without_config_text_uses_default() {
    for text in [None, Some(""), Some("  \n  ")] {
        let config = DropdownConfig::from_page_text(text).expect("default config");
        assert_eq!(config, DropdownConfig::default(), "{text:?}");
    }
}

#[test]
fn test_page_config_text_is_parsed() {
    let json = r#"{ "bindings": [{ "trigger": "more" }] }"#;
    let config = DropdownConfig::from_page_text(Some(json)).expect("valid json");
    assert_eq!(config.bindings, vec![Binding::sibling("more")]);

    let result = DropdownConfig::from_page_text(Some("not json"));
    assert!(matches!(result, Err(DropdownError::Config(_))));

    let result = DropdownConfig::from_page_text(Some(r#"{ "show-class": "" }"#));
    assert!(matches!(result, Err(DropdownError::InvalidClass { .. })));
}

#[test]
fn test_from_json_syntax_error() {
    let result = DropdownConfig::from_json("{ bindings: ");
    assert!(matches!(result, Err(DropdownError::Config(_))));
}

#[test]
fn test_from_json_unknown_policy() {
    let result = DropdownConfig::from_json(r#"{ "exclusive": "sometimes" }"#);
    assert!(matches!(result, Err(DropdownError::Config(_))));
}

#[test]
fn test_from_json_runs_validation() {
    let result = DropdownConfig::from_json(
        r#"{ "bindings": [{ "trigger": "a" }, { "trigger": "a", "menu": "m" }] }"#,
    );
    assert!(matches!(result, Err(DropdownError::DuplicateTrigger(id)) if id == "a"));
}

#[test]
fn test_validate_rejects_bad_classes() {
    let result = DropdownConfig::default().show_class("").validate();
    assert!(matches!(
        result,
        Err(DropdownError::InvalidClass { field: "show-class", .. })
    ));

    let result = DropdownConfig::default().menu_class("dropdown menu").validate();
    assert!(matches!(
        result,
        Err(DropdownError::InvalidClass { field: "menu-class", .. })
    ));
}

#[test]
fn test_validate_rejects_empty_trigger() {
    let result = DropdownConfig::new().trigger("ok").trigger("").validate();
    assert!(matches!(result, Err(DropdownError::EmptyTrigger { index: 1 })));
}

#[test]
fn test_error_display() {
    let error = DropdownError::DuplicateTrigger("navbarDropdown".to_string());
    assert_eq!(error.to_string(), "trigger 'navbarDropdown' is bound more than once");

    let error = DropdownError::invalid_class("show-class", "a b");
    assert_eq!(
        error.to_string(),
        "show-class must be a single non-empty class name, got 'a b'"
    );
}

#[test]
fn test_config_serializes_back() {
    let config = DropdownConfig::default().trigger_with_menu("userDropdown", "user-menu");
    let json = serde_json::to_string(&config).expect("serializable");
    assert!(json.contains("\"menu-class\":\"dropdown-menu\""));
    assert!(!json.contains("\"menu\":null"));
    assert_eq!(DropdownConfig::from_json(&json).expect("valid json"), config);
}
