//! `wa.me` click-to-chat link building.

use serde::Serialize;
use std::fmt;
use tracing::debug;
use wachat_core::product::ProductContext;
use wachat_core::settings::Settings;

use crate::message::render;
use crate::phone::{PhoneNormalizer, PhonePolicy};

pub const WA_ME_BASE: &str = "https://wa.me/";

/// A ready-to-embed chat link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLink {
    /// Normalised destination number.
    pub phone: String,
    /// Message before encoding.
    pub message: String,
    pub url: String,
}

impl ChatLink {
    /// `https://wa.me/<phone>?text=<percent-encoded message>`.
    ///
    /// Encoding is RFC 3986: `A-Z a-z 0-9 - _ . ~` pass through, everything
    /// else (space included) becomes `%XX` over the UTF-8 bytes.
    pub fn new(phone: impl Into<String>, message: impl Into<String>) -> Self {
        let phone = phone.into();
        let message = message.into();
        let url = format!(
            "{WA_ME_BASE}{phone}?text={}",
            urlencoding::encode(&message)
        );
        Self {
            phone,
            message,
            url,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Decode the `text` query parameter back out of the URL.
    ///
    /// The URL is read the way a browser would: the fragment is dropped
    /// first, then the query starts at the first `?`. A lenient phone that
    /// kept a `#` or `?` therefore leaves no usable `text` parameter.
    pub fn decoded_text(&self) -> Option<String> {
        let without_fragment = self.url.split('#').next()?;
        let (_, query) = without_fragment.split_once('?')?;
        let encoded = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("text="))?;
        urlencoding::decode(encoded).ok().map(|t| t.into_owned())
    }
}

impl fmt::Display for ChatLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Builds links for the product button and the floating button.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkBuilder {
    phone: PhoneNormalizer,
}

impl LinkBuilder {
    pub fn new(policy: PhonePolicy) -> Self {
        Self {
            phone: PhoneNormalizer::new(policy),
        }
    }

    /// Dispatch on the call site.
    ///
    /// With `fixed_message` this is the floating button and `product` is
    /// ignored. Without it this is the product button, which needs a product.
    pub fn build(
        &self,
        settings: &Settings,
        product: Option<&ProductContext>,
        fixed_message: Option<&str>,
    ) -> Option<ChatLink> {
        match fixed_message {
            Some(message) => self.floating_link(settings, message),
            None => self.product_link(settings, product),
        }
    }

    /// Product-page button: the settings template filled in for `product`.
    pub fn product_link(
        &self,
        settings: &Settings,
        product: Option<&ProductContext>,
    ) -> Option<ChatLink> {
        let phone = self.enabled_phone(settings)?;
        let Some(product) = product else {
            debug!("no product link: no product in context");
            return None;
        };
        let message = render(&settings.message_template, product);
        Some(ChatLink::new(phone, message))
    }

    /// Floating button: a fixed greeting, independent of the template.
    pub fn floating_link(&self, settings: &Settings, message: &str) -> Option<ChatLink> {
        let phone = self.enabled_phone(settings)?;
        Some(ChatLink::new(phone, message))
    }

    /// Preview link for the settings screen.
    ///
    /// Ignores `enabled` so the merchant can check the number while the
    /// buttons are switched off.
    pub fn test_link(&self, settings: &Settings, message: &str) -> Option<ChatLink> {
        let phone = self
            .phone
            .normalize(&settings.country_code, &settings.phone_number)?;
        Some(ChatLink::new(phone, message))
    }

    fn enabled_phone(&self, settings: &Settings) -> Option<String> {
        if !settings.enabled {
            debug!("no link: disabled in settings");
            return None;
        }
        let phone = self
            .phone
            .normalize(&settings.country_code, &settings.phone_number);
        if phone.is_none() {
            debug!("no link: phone number empty after normalisation");
        }
        phone
    }
}

/// [`LinkBuilder::build`] with the lenient phone policy.
pub fn build(
    settings: &Settings,
    product: Option<&ProductContext>,
    fixed_message: Option<&str>,
) -> Option<ChatLink> {
    LinkBuilder::default().build(settings, product, fixed_message)
}

/// [`LinkBuilder::test_link`] with the lenient phone policy.
pub fn test_link(settings: &Settings, message: &str) -> Option<ChatLink> {
    LinkBuilder::default().test_link(settings, message)
}
