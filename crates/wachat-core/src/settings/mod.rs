//! Merchant settings: the flat key/value record that drives every link.
//!
//! A [`Settings`] value is read once per render from a
//! [`SettingsStore`](crate::store::SettingsStore) and passed down explicitly.
//! Missing keys fall back to documented defaults; odd values are tolerated.

mod position;

#[cfg(test)]
mod tests;

pub use position::ButtonPosition;

use std::fmt;
use tracing::warn;

use crate::product::Placeholder;
use crate::store::SettingsStore;

pub const DEFAULT_COUNTRY_CODE: &str = "+1";
pub const DEFAULT_MESSAGE_TEMPLATE: &str =
    "Hi! I'm interested in: {product_name} - {product_url}";
pub const DEFAULT_BUTTON_TEXT: &str = "WhatsApp";

/// Names of the persisted settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Enabled,
    CountryCode,
    PhoneNumber,
    MessageTemplate,
    ButtonText,
    FloatingEnabled,
    ButtonPosition,
}

impl SettingKey {
    pub const ALL: [SettingKey; 7] = [
        SettingKey::Enabled,
        SettingKey::CountryCode,
        SettingKey::PhoneNumber,
        SettingKey::MessageTemplate,
        SettingKey::ButtonText,
        SettingKey::FloatingEnabled,
        SettingKey::ButtonPosition,
    ];

    /// Key as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::CountryCode => "country_code",
            Self::PhoneNumber => "phone_number",
            Self::MessageTemplate => "message_template",
            Self::ButtonText => "button_text",
            Self::FloatingEnabled => "floating_enabled",
            Self::ButtonPosition => "button_position",
        }
    }

    /// Parse a stored key name. Accepts the camelCase spelling too.
    pub fn parse(name: &str) -> Option<Self> {
        let squash = |s: &str| s.replace(['_', '-'], "").to_lowercase();
        let wanted = squash(name.trim());
        Self::ALL
            .into_iter()
            .find(|k| squash(k.as_str()) == wanted)
    }

    /// Stored form of the documented default.
    pub fn default_value(&self) -> String {
        Settings::default().stored_value(*self)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The merchant's link settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub enabled: bool,
    pub country_code: String,
    pub phone_number: String,
    pub message_template: String,
    pub button_text: String,
    pub floating_enabled: bool,
    pub button_position: ButtonPosition,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            phone_number: String::new(),
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            floating_enabled: true,
            button_position: ButtonPosition::default(),
        }
    }
}

impl Settings {
    /// Read every setting from `store`, using the default for missing keys.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();
        let text =
            |key: SettingKey, fallback: String| store.get(key.as_str()).unwrap_or(fallback);
        let flag = |key: SettingKey, fallback: bool| {
            store
                .get(key.as_str())
                .map(|v| parse_flag(&v))
                .unwrap_or(fallback)
        };

        let button_position = match store.get(SettingKey::ButtonPosition.as_str()) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(p) => ButtonPosition::from_priority(p),
                Err(_) => {
                    warn!("button_position {raw:?} is not an integer, using default");
                    defaults.button_position
                }
            },
            None => defaults.button_position,
        };

        Self {
            enabled: flag(SettingKey::Enabled, defaults.enabled),
            country_code: text(SettingKey::CountryCode, defaults.country_code),
            phone_number: text(SettingKey::PhoneNumber, defaults.phone_number),
            message_template: text(SettingKey::MessageTemplate, defaults.message_template),
            button_text: text(SettingKey::ButtonText, defaults.button_text),
            floating_enabled: flag(SettingKey::FloatingEnabled, defaults.floating_enabled),
            button_position,
        }
    }

    /// Persist every field into `store`.
    pub fn write_to(&self, store: &mut dyn SettingsStore) {
        for key in SettingKey::ALL {
            store.set(key.as_str(), &self.stored_value(key));
        }
    }

    /// Stored (string) form of one field.
    pub fn stored_value(&self, key: SettingKey) -> String {
        match key {
            SettingKey::Enabled => flag_value(self.enabled).to_string(),
            SettingKey::CountryCode => self.country_code.clone(),
            SettingKey::PhoneNumber => self.phone_number.clone(),
            SettingKey::MessageTemplate => self.message_template.clone(),
            SettingKey::ButtonText => self.button_text.clone(),
            SettingKey::FloatingEnabled => flag_value(self.floating_enabled).to_string(),
            SettingKey::ButtonPosition => self.button_position.priority().to_string(),
        }
    }

    /// Whether a phone number has been entered at all.
    pub fn has_phone(&self) -> bool {
        !self.phone_number.trim().is_empty()
    }

    /// Advisory checks. Issues never stop a link from being built.
    pub fn validate(&self) -> Vec<SettingsIssue> {
        let mut issues = Vec::new();

        if !is_clean_country_code(&self.country_code) {
            issues.push(SettingsIssue::CountryCodeFormat(self.country_code.clone()));
        }

        if !self.has_phone() {
            issues.push(SettingsIssue::MissingPhone);
        } else {
            let odd: String = self
                .phone_number
                .chars()
                .filter(|c| !(c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+')))
                .collect();
            if !odd.is_empty() {
                issues.push(SettingsIssue::PhoneCharacters(odd));
            }
        }

        if !self.message_template.is_empty()
            && Placeholder::ALL
                .iter()
                .all(|p| !self.message_template.contains(p.token()))
        {
            issues.push(SettingsIssue::NoPlaceholders);
        }

        if let ButtonPosition::Custom(p) = self.button_position {
            issues.push(SettingsIssue::NonStandardPosition(p));
        }

        issues
    }
}

/// Something worth telling the merchant about their settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIssue {
    /// Country code does not look like `+` followed by 1-4 digits.
    CountryCodeFormat(String),
    /// No phone number, so no link can be built.
    MissingPhone,
    /// Characters that survive normalisation (carries the offending chars).
    PhoneCharacters(String),
    /// Template does not mention the product at all.
    NoPlaceholders,
    /// Position outside the four named insertion points.
    NonStandardPosition(i64),
}

impl fmt::Display for SettingsIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountryCodeFormat(cc) => {
                write!(f, "country code {cc:?} should look like +1 to +9999")
            }
            Self::MissingPhone => f.write_str("no phone number set; buttons will not render"),
            Self::PhoneCharacters(chars) => {
                write!(f, "phone number contains unexpected characters: {chars:?}")
            }
            Self::NoPlaceholders => f.write_str(
                "message template has no {product_name}, {product_url} or {product_price}",
            ),
            Self::NonStandardPosition(p) => {
                write!(f, "button position {p} is not one of 15, 25, 35, 45")
            }
        }
    }
}

/// `^\+\d{1,4}$`
fn is_clean_country_code(cc: &str) -> bool {
    match cc.strip_prefix('+') {
        Some(digits) => {
            (1..=4).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Truthy stored flag. Any other present value (including empty) is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "on"
    )
}

/// Stored form of a flag.
pub fn flag_value(on: bool) -> &'static str {
    if on {
        "yes"
    } else {
        "no"
    }
}
