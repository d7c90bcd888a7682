//! Dropdown configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DropdownError;

/// Trigger ID used by the navbar markup when no configuration is given.
pub const DEFAULT_TRIGGER_ID: &str = "navbarDropdown";

/// Class every dropdown menu carries.
pub const DEFAULT_MENU_CLASS: &str = "dropdown-menu";

/// Class marking a menu as visible.
pub const DEFAULT_SHOW_CLASS: &str = "show";

/// Which open menus are closed when another dropdown opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusivePolicy {
    /// Close every open menu in the document, whoever owns it.
    #[default]
    Document,

    /// Close only menus that belong to an installed controller.
    Registered,
}

/// One trigger and the menu it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// ID of the trigger element.
    pub trigger: String,

    /// ID of the menu element. When absent, the menu is the trigger's next
    /// element sibling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

impl Binding {
    /// Bind a trigger to its next element sibling.
    pub fn sibling(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            menu: None,
        }
    }

    /// Bind a trigger to the menu with the given ID.
    pub fn explicit(trigger: impl Into<String>, menu: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            menu: Some(menu.into()),
        }
    }
}

/// Page-wide dropdown configuration.
///
/// The default binds the navbar trigger to its sibling menu, which is what
/// the site markup provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DropdownConfig {
    pub bindings: Vec<Binding>,
    pub menu_class: String,
    pub show_class: String,
    pub exclusive: ExclusivePolicy,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            bindings: vec![Binding::sibling(DEFAULT_TRIGGER_ID)],
            ..Self::new()
        }
    }
}

impl DropdownConfig {
    /// A config with default marker classes and no bindings.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            menu_class: DEFAULT_MENU_CLASS.to_string(),
            show_class: DEFAULT_SHOW_CLASS.to_string(),
            exclusive: ExclusivePolicy::Document,
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, DropdownError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration from the text of an embedded config element.
    ///
    /// A page without one, or with a blank one, gets the default navbar
    /// configuration.
    pub fn from_page_text(text: Option<&str>) -> Result<Self, DropdownError> {
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    /// Add a trigger whose menu is its next element sibling.
    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.bindings.push(Binding::sibling(trigger));
        self
    }

    /// Add a trigger with an explicitly named menu.
    pub fn trigger_with_menu(
        mut self,
        trigger: impl Into<String>,
        menu: impl Into<String>,
    ) -> Self {
        self.bindings.push(Binding::explicit(trigger, menu));
        self
    }

    pub fn menu_class(mut self, class: impl Into<String>) -> Self {
        self.menu_class = class.into();
        self
    }

    pub fn show_class(mut self, class: impl Into<String>) -> Self {
        self.show_class = class.into();
        self
    }

    pub fn exclusive(mut self, policy: ExclusivePolicy) -> Self {
        self.exclusive = policy;
        self
    }

    /// Check marker classes and reject duplicate or empty triggers.
    pub fn validate(&self) -> Result<(), DropdownError> {
        check_class("menu-class", &self.menu_class)?;
        check_class("show-class", &self.show_class)?;

        let mut seen = HashSet::new();
        for (index, binding) in self.bindings.iter().enumerate() {
            if binding.trigger.is_empty() {
                return Err(DropdownError::EmptyTrigger { index });
            }
            if !seen.insert(binding.trigger.as_str()) {
                return Err(DropdownError::DuplicateTrigger(binding.trigger.clone()));
            }
        }
        Ok(())
    }
}

fn check_class(field: &'static str, value: &str) -> Result<(), DropdownError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(DropdownError::invalid_class(field, value));
    }
    Ok(())
}
