//! Phone number normalisation for `wa.me` paths.

/// Characters removed from `country_code + phone_number`.
const STRIPPED: [char; 5] = ['+', ' ', '-', '(', ')'];

/// How picky normalisation is about what survives stripping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PhonePolicy {
    /// Keep whatever is left, letters included.
    #[default]
    Lenient,
    /// Only ASCII digits may remain; anything else means no number.
    Strict,
}

impl PhonePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Normaliser bound to a policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneNormalizer {
    policy: PhonePolicy,
}

impl PhoneNormalizer {
    pub fn new(policy: PhonePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PhonePolicy {
        self.policy
    }

    /// Join country code and number, then strip `+`, spaces, `-`, `(` and `)`.
    ///
    /// Returns `None` when no number was entered or nothing is left.
    pub fn normalize(&self, country_code: &str, phone_number: &str) -> Option<String> {
        if phone_number.is_empty() {
            return None;
        }

        let number: String = format!("{country_code}{phone_number}")
            .chars()
            .filter(|c| !STRIPPED.contains(c))
            .collect();

        // A number made only of stripped characters leaves just the country code.
        let local_left = phone_number.chars().any(|c| !STRIPPED.contains(&c));
        if number.is_empty() || !local_left {
            return None;
        }

        if self.policy == PhonePolicy::Strict && !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(number)
    }
}

/// Lenient normalisation.
pub fn normalize(country_code: &str, phone_number: &str) -> Option<String> {
    PhoneNormalizer::default().normalize(country_code, phone_number)
}
