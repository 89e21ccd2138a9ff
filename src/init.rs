//! Init wizard — interactive settings form with cliclack styled prompts.

use crate::commands::App;
use wachat_core::countries::{self, COUNTRY_CODES};
use wachat_core::product::Placeholder;
use wachat_core::settings::{ButtonPosition, Settings};

/// Picker value for a dial code that is not in the list.
const OTHER_COUNTRY: &str = "other";

/// Run the interactive settings wizard.
///
/// Starts from the stored settings, so re-running it edits rather than resets.
pub fn run(app: &App) -> anyhow::Result<()> {
    cliclack::intro(console::style("wachat init").bold().to_string())?;
    cliclack::log::info(format!("Settings file: {}", app.settings_path().display()))?;

    let current = app.load_settings()?;

    // 1. Master switch.
    let enabled: bool = cliclack::confirm("Enable the WhatsApp button on product pages?")
        .initial_value(current.enabled)
        .interact()?;

    // 2. Country code.
    let mut select = cliclack::select("Country code").initial_value(initial_country(&current));
    for c in COUNTRY_CODES {
        select = select.item(c.dial_code, c.label(), "");
    }
    select = select.item(OTHER_COUNTRY, "Other", "Type a dial code");
    let picked: &str = select.interact()?;
    let country_code = if picked == OTHER_COUNTRY {
        let typed: String = cliclack::input("Dial code")
            .placeholder("+358")
            .default_input(&current.country_code)
            .interact()?;
        typed.trim().to_string()
    } else {
        picked.to_string()
    };

    // 3. Phone number.
    let phone_number: String = cliclack::input("WhatsApp number")
        .placeholder("Number without country code, e.g. 555 123 4567")
        .default_input(&current.phone_number)
        .required(false)
        .interact()?;

    // 4. Button text.
    let button_text: String = cliclack::input("Button text")
        .default_input(&current.button_text)
        .interact()?;

    // 5. Position.
    let mut select = cliclack::select("Button position").initial_value(current.button_position);
    for pos in ButtonPosition::NAMED {
        select = select.item(pos, pos.label(), format!("priority {}", pos.priority()));
    }
    if let ButtonPosition::Custom(_) = current.button_position {
        let pos = current.button_position;
        select = select.item(pos, pos.label(), format!("priority {}", pos.priority()));
    }
    let button_position: ButtonPosition = select.interact()?;

    // 6. Message template.
    cliclack::note("Available variables", placeholder_help())?;
    let message_template: String = cliclack::input("Pre-filled message")
        .default_input(&current.message_template)
        .required(false)
        .interact()?;

    // 7. Floating button.
    let floating_enabled: bool = cliclack::confirm("Show the floating WhatsApp button?")
        .initial_value(current.floating_enabled)
        .interact()?;

    let settings = Settings {
        enabled,
        country_code,
        phone_number: phone_number.trim().to_string(),
        message_template,
        button_text,
        floating_enabled,
        button_position,
    };

    app.save_settings(&settings)?;
    cliclack::log::success("Settings saved successfully!")?;

    for issue in settings.validate() {
        cliclack::log::warning(issue.to_string())?;
    }

    match app.preview_link(&settings, None) {
        Some(link) => cliclack::note("Your WhatsApp URL", link.to_string())?,
        None => cliclack::log::warning("Please enter your WhatsApp number to get a link.")?,
    }

    cliclack::outro("Setup complete")?;
    Ok(())
}

/// Country picker starting point for `settings`.
fn initial_country(settings: &Settings) -> &'static str {
    countries::lookup(&settings.country_code)
        .map(|c| c.dial_code)
        .unwrap_or(OTHER_COUNTRY)
}

fn placeholder_help() -> String {
    Placeholder::ALL
        .iter()
        .map(|p| format!("{} - {}", p.token(), p.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
