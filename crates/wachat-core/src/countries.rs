//! Dial codes offered by the settings form.
//!
//! This is only a picker list. Link building accepts any country code.

/// One selectable country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub dial_code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

impl CountryCode {
    /// Label used in pickers, e.g. `🇬🇧 UK (+44)`.
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.flag, self.name, self.dial_code)
    }
}

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { dial_code: "+1", name: "USA", flag: "🇺🇸" },
    CountryCode { dial_code: "+44", name: "UK", flag: "🇬🇧" },
    CountryCode { dial_code: "+20", name: "Egypt", flag: "🇪🇬" },
    CountryCode { dial_code: "+971", name: "UAE", flag: "🇦🇪" },
    CountryCode { dial_code: "+966", name: "Saudi Arabia", flag: "🇸🇦" },
    CountryCode { dial_code: "+91", name: "India", flag: "🇮🇳" },
    CountryCode { dial_code: "+92", name: "Pakistan", flag: "🇵🇰" },
    CountryCode { dial_code: "+62", name: "Indonesia", flag: "🇮🇩" },
    CountryCode { dial_code: "+234", name: "Nigeria", flag: "🇳🇬" },
    CountryCode { dial_code: "+55", name: "Brazil", flag: "🇧🇷" },
    CountryCode { dial_code: "+52", name: "Mexico", flag: "🇲🇽" },
    CountryCode { dial_code: "+49", name: "Germany", flag: "🇩🇪" },
    CountryCode { dial_code: "+33", name: "France", flag: "🇫🇷" },
    CountryCode { dial_code: "+39", name: "Italy", flag: "🇮🇹" },
    CountryCode { dial_code: "+34", name: "Spain", flag: "🇪🇸" },
    CountryCode { dial_code: "+90", name: "Turkey", flag: "🇹🇷" },
    CountryCode { dial_code: "+27", name: "South Africa", flag: "🇿🇦" },
    CountryCode { dial_code: "+61", name: "Australia", flag: "🇦🇺" },
];

/// Find a listed country by dial code. Whitespace is ignored.
pub fn lookup(dial_code: &str) -> Option<&'static CountryCode> {
    let wanted = dial_code.trim();
    COUNTRY_CODES.iter().find(|c| c.dial_code == wanted)
}
