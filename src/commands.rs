//! Command handlers. This binary plays the storefront's part: it reads the
//! settings fresh for each request, applies the render gate, and prints
//! whatever link the kernel hands back.

use anyhow::{bail, Context as _};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use wachat_core::config::Config;
use wachat_core::product::ProductContext;
use wachat_core::settings::{SettingKey, Settings};
use wachat_core::store::{install_defaults, SettingsStore, TomlSettingsStore};
use wachat_link::{
    qr, should_render, ChatLink, LinkBuilder, PhonePolicy, RenderContext, RenderSite,
};

/// Product handed over by the caller.
#[derive(Args, Debug, Default, Clone)]
pub struct ProductArgs {
    /// Product name.
    #[arg(long)]
    pub name: Option<String>,
    /// Product page URL.
    #[arg(long)]
    pub url: Option<String>,
    /// Formatted product price.
    #[arg(long)]
    pub price: Option<String>,
    /// Product as JSON, inline or a path to a file.
    #[arg(long, conflicts_with_all = ["name", "url", "price"])]
    pub product_json: Option<String>,
}

impl ProductArgs {
    /// Validate the product at the boundary. `None` when no product was given.
    pub fn resolve(&self) -> anyhow::Result<Option<ProductContext>> {
        if let Some(ref raw) = self.product_json {
            let json = if raw.trim_start().starts_with('{') {
                raw.clone()
            } else {
                std::fs::read_to_string(raw)
                    .with_context(|| format!("failed to read product JSON from {raw}"))?
            };
            return Ok(Some(ProductContext::from_json(&json)?));
        }

        match (&self.name, &self.url) {
            (None, None) if self.price.is_none() => Ok(None),
            (Some(name), Some(url)) => Ok(Some(ProductContext::new(
                name.as_str(),
                url.as_str(),
                self.price.clone(),
            ))),
            _ => bail!("a product needs both --name and --url"),
        }
    }
}

pub struct App {
    cfg: Config,
    settings_path: PathBuf,
    builder: LinkBuilder,
}

impl App {
    pub fn new(cfg: Config, settings_path: Option<PathBuf>, strict: bool) -> Self {
        let settings_path = settings_path.unwrap_or_else(|| cfg.settings_path());
        let policy = PhonePolicy::from_strict(strict || cfg.link.strict_phone);
        Self {
            cfg,
            settings_path,
            builder: LinkBuilder::new(policy),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn open_store(&self) -> anyhow::Result<TomlSettingsStore> {
        Ok(TomlSettingsStore::open(&self.settings_path)?)
    }

    /// Fresh settings for one request.
    pub fn load_settings(&self) -> anyhow::Result<Settings> {
        Ok(Settings::from_store(&self.open_store()?))
    }

    // --- Links ---

    pub fn link(
        &self,
        product: &ProductArgs,
        is_product_page: bool,
        json: bool,
    ) -> anyhow::Result<()> {
        let product = product.resolve()?;
        let settings = self.load_settings()?;
        let link = self.product_button(&settings, product.as_ref(), is_product_page);
        emit(link.as_ref(), json)
    }

    pub fn floating(
        &self,
        message: Option<&str>,
        is_product_page: bool,
        json: bool,
    ) -> anyhow::Result<()> {
        let settings = self.load_settings()?;
        let message = message.unwrap_or(&self.cfg.link.floating_message);
        let link = self.floating_button(&settings, message, is_product_page);
        emit(link.as_ref(), json)
    }

    /// Gate, then build the inline product button.
    pub fn product_button(
        &self,
        settings: &Settings,
        product: Option<&ProductContext>,
        is_product_page: bool,
    ) -> Option<ChatLink> {
        let ctx = RenderContext::for_site(RenderSite::ProductButton, settings, is_product_page);
        if !should_render(ctx) {
            debug!("product button not rendered: {ctx:?}");
            return None;
        }
        self.builder.build(settings, product, None)
    }

    /// Gate, then build the floating button.
    pub fn floating_button(
        &self,
        settings: &Settings,
        message: &str,
        is_product_page: bool,
    ) -> Option<ChatLink> {
        let ctx = RenderContext::for_site(RenderSite::FloatingButton, settings, is_product_page);
        if !should_render(ctx) {
            debug!("floating button not rendered: {ctx:?}");
            return None;
        }
        self.builder.build(settings, None, Some(message))
    }

    /// Admin preview link, with `link.test_message` unless `message` is given.
    pub fn preview_link(&self, settings: &Settings, message: Option<&str>) -> Option<ChatLink> {
        let message = message.unwrap_or(&self.cfg.link.test_message);
        self.builder.test_link(settings, message)
    }

    pub fn test_link(&self, message: Option<&str>) -> anyhow::Result<()> {
        let settings = self.load_settings()?;
        match self.preview_link(&settings, message) {
            Some(link) => println!("{link}"),
            None => eprintln!(
                "No WhatsApp number set. Run `wachat settings set phone_number <number>`."
            ),
        }
        Ok(())
    }

    pub fn qr(
        &self,
        product: &ProductArgs,
        floating: bool,
        out: Option<&Path>,
        module_px: u32,
    ) -> anyhow::Result<()> {
        let settings = self.load_settings()?;
        let link = if floating {
            self.builder
                .floating_link(&settings, &self.cfg.link.floating_message)
        } else {
            let product = product.resolve()?;
            if product.is_none() {
                bail!("pass --name and --url (or --product-json), or use --floating");
            }
            self.builder.product_link(&settings, product.as_ref())
        };

        let Some(link) = link else {
            bail!("no link to encode: check that wachat is enabled and a phone number is set");
        };

        match out {
            Some(path) => {
                let png = qr::to_png(&link, module_px)?;
                std::fs::write(path, png)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("QR code for {link} written to {}", path.display());
                println!("{}", path.display());
            }
            None => {
                print!("{}", qr::to_terminal(&link)?);
                println!("{link}");
            }
        }
        Ok(())
    }

    // --- Settings ---

    pub fn settings_show(&self) -> anyhow::Result<()> {
        let settings = self.load_settings()?;
        print!("{}", format_settings(&settings));
        Ok(())
    }

    pub fn settings_get(&self, key: &str) -> anyhow::Result<()> {
        let key = parse_key(key)?;
        let settings = self.load_settings()?;
        println!("{}", settings.stored_value(key));
        Ok(())
    }

    pub fn settings_set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let key = parse_key(key)?;
        let mut store = self.open_store()?;
        store.set(key.as_str(), value);
        store.save()?;

        for issue in Settings::from_store(&store).validate() {
            eprintln!("warning: {issue}");
        }
        Ok(())
    }

    pub fn settings_unset(&self, key: &str) -> anyhow::Result<()> {
        let key = parse_key(key)?;
        let mut store = self.open_store()?;
        if store.remove(key.as_str()) {
            store.save()?;
        }
        Ok(())
    }

    pub fn settings_defaults(&self) -> anyhow::Result<()> {
        let mut store = self.open_store()?;
        let written = install_defaults(&mut store);
        if written > 0 {
            store.save()?;
        }
        println!("{written} default(s) written to {}", store.path().display());
        Ok(())
    }

    pub fn settings_reset(&self) -> anyhow::Result<()> {
        let mut store = self.open_store()?;
        Settings::default().write_to(&mut store);
        store.save()?;
        println!("settings reset in {}", store.path().display());
        Ok(())
    }

    pub fn settings_check(&self) -> anyhow::Result<()> {
        let issues = self.load_settings()?.validate();
        if issues.is_empty() {
            println!("ok");
        }
        for issue in issues {
            println!("- {issue}");
        }
        Ok(())
    }

    /// Persist a full settings record (used by `init`).
    pub fn save_settings(&self, settings: &Settings) -> anyhow::Result<()> {
        let mut store = self.open_store()?;
        settings.write_to(&mut store);
        store.save()?;
        Ok(())
    }

    pub fn status(&self) -> anyhow::Result<()> {
        cliclack::intro(console::style("wachat status").bold().to_string())?;
        cliclack::log::info(format!("Settings: {}", self.settings_path.display()))?;

        let settings = self.load_settings()?;
        cliclack::note("Settings", format_settings(&settings).trim_end())?;

        let issues = settings.validate();
        if issues.is_empty() {
            cliclack::log::success("No problems found")?;
        }
        for issue in &issues {
            cliclack::log::warning(issue.to_string())?;
        }

        match self.preview_link(&settings, None) {
            Some(link) => cliclack::log::success(format!("Preview: {link}"))?,
            None => cliclack::log::error("No WhatsApp number set")?,
        }
        if !settings.enabled {
            cliclack::log::warning("Buttons are disabled")?;
        }

        cliclack::outro("Done")?;
        Ok(())
    }
}

fn parse_key(key: &str) -> anyhow::Result<SettingKey> {
    match SettingKey::parse(key) {
        Some(k) => Ok(k),
        None => {
            let known: Vec<&str> = SettingKey::ALL.iter().map(|k| k.as_str()).collect();
            bail!("unknown setting '{key}' (known: {})", known.join(", "))
        }
    }
}

/// One `key = value` line per setting.
pub fn format_settings(settings: &Settings) -> String {
    SettingKey::ALL
        .iter()
        .map(|key| format!("{key} = {:?}\n", settings.stored_value(*key)))
        .collect()
}

/// Print a link, or nothing at all when there is none.
fn emit(link: Option<&ChatLink>, json: bool) -> anyhow::Result<()> {
    let Some(link) = link else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(link)?);
    } else {
        println!("{link}");
    }
    Ok(())
}
