//! # wachat-link
//!
//! Turns merchant settings and a product into a `wa.me` click-to-chat link.
//!
//! Everything here is a pure function of its inputs. A link that should not
//! be shown comes back as `None`; nothing in this crate fails loudly over a
//! configuration typo.

pub mod gate;
pub mod link;
pub mod message;
pub mod phone;
pub mod qr;

pub use gate::{should_render, RenderContext, RenderSite};
pub use link::{build, test_link, ChatLink, LinkBuilder, WA_ME_BASE};
pub use message::render;
pub use phone::{normalize, PhoneNormalizer, PhonePolicy};
