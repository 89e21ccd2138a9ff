//! Message templates with `{product_*}` placeholders.

use wachat_core::product::ProductContext;

pub use wachat_core::product::Placeholder;

/// Substitute product fields into `template`.
///
/// Plain substring matching in a single left-to-right pass: every occurrence
/// is replaced, unknown `{...}` tokens stay as written, and substituted
/// values are never scanned again.
pub fn render(template: &str, product: &ProductContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(brace) = rest.find('{') {
        out.push_str(&rest[..brace]);
        let tail = &rest[brace..];
        match Placeholder::ALL.iter().find(|p| tail.starts_with(p.token())) {
            Some(p) => {
                out.push_str(p.value_in(product));
                rest = &tail[p.token().len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Placeholders that occur in `template`, in declaration order.
pub fn placeholders_in(template: &str) -> Vec<Placeholder> {
    Placeholder::ALL
        .into_iter()
        .filter(|p| template.contains(p.token()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> ProductContext {
        ProductContext::new("Shoe", "http://x/p1", Some("10".to_string()))
    }

    #[test]
    fn test_render_name_and_url() {
        assert_eq!(
            render("Hi {product_name} at {product_url}", &shoe()),
            "Hi Shoe at http://x/p1"
        );
    }

    #[test]
    fn test_render_price() {
        assert_eq!(render("Only {product_price}!", &shoe()), "Only 10!");
        let free = ProductContext::new("Gift", "u", None);
        assert_eq!(render("Only {product_price}!", &free), "Only !");
    }

    #[test]
    fn test_render_without_placeholders_is_unchanged() {
        let odd = ProductContext::new("{product_url}", "}{", Some("{".to_string()));
        for product in [shoe(), odd] {
            assert_eq!(
                render("No placeholders here", &product),
                "No placeholders here"
            );
        }
    }

    #[test]
    fn test_render_empty_template() {
        assert_eq!(render("", &shoe()), "");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        assert_eq!(
            render("{product_name}, {product_name}, {product_name}", &shoe()),
            "Shoe, Shoe, Shoe"
        );
    }

    #[test]
    fn test_render_leaves_unknown_tokens() {
        assert_eq!(
            render("{customer} wants {product_name} {product_sku} {", &shoe()),
            "{customer} wants Shoe {product_sku} {"
        );
    }

    #[test]
    fn test_render_does_not_chain_substitutions() {
        let sneaky = ProductContext::new("{product_url}", "http://x/p1", None);
        assert_eq!(
            render("{product_name} / {product_url}", &sneaky),
            "{product_url} / http://x/p1"
        );
    }

    #[test]
    fn test_render_adjacent_and_nested_braces() {
        assert_eq!(
            render("{{product_name}}{product_price}", &shoe()),
            "{Shoe}10"
        );
    }

    #[test]
    fn test_render_unicode_template() {
        let p = ProductContext::new("Café crème", "u", None);
        assert_eq!(
            render("¡Hola! 👋 {product_name}", &p),
            "¡Hola! 👋 Café crème"
        );
    }

    #[test]
    fn test_render_default_template() {
        assert_eq!(
            render(wachat_core::settings::DEFAULT_MESSAGE_TEMPLATE, &shoe()),
            "Hi! I'm interested in: Shoe - http://x/p1"
        );
    }

    #[test]
    fn test_placeholders_in() {
        assert_eq!(
            placeholders_in("{product_price} {product_name}"),
            vec![Placeholder::Name, Placeholder::Price]
        );
        assert!(placeholders_in("nothing").is_empty());
    }
}
