//! WhatsApp checkout handoff.
//!
//! There is no payment processing: checkout builds a human-readable order
//! summary from the current line items and hands it to WhatsApp as a
//! pre-filled message link. Opening the link is the caller's concern.

use rust_decimal::Decimal;
use url::Url;

use crate::models::CartLineItem;

/// Build the plain-text order summary sent in the checkout message.
///
/// One numbered line per cart item with its subtotal, the grand total, and
/// blank delivery fields for the customer to fill in.
#[must_use]
pub fn order_summary(items: &[CartLineItem]) -> String {
    let mut message = String::from("*New order from ShopVista*\n\n*Items:*\n");

    for (index, item) in items.iter().enumerate() {
        message.push_str(&format!(
            "{}. {} - {} pcs - {:.2}\n",
            index + 1,
            item.product.name,
            item.quantity,
            item.subtotal(),
        ));
    }

    let total: Decimal = items.iter().map(CartLineItem::subtotal).sum();
    message.push_str(&format!("\n*Total:* {total:.2}"));
    message.push_str("\n\n*Delivery details:*\nName: \nAddress: \nPhone: ");

    message
}

/// Build the `wa.me` link carrying the order summary for `phone`.
///
/// Returns `None` for an empty cart - there is no order to hand off.
#[must_use]
pub fn whatsapp_url(phone: &str, items: &[CartLineItem]) -> Option<Url> {
    if items.is_empty() {
        return None;
    }

    let message = order_summary(items);
    let encoded = urlencoding::encode(&message);
    Url::parse(&format!("https://wa.me/{phone}?text={encoded}")).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shopvista_core::{CategoryId, ImageRef, Price, ProductId, Rating};

    use crate::models::Product;

    fn line(name: &str, price_cents: i64, quantity: u32) -> CartLineItem {
        CartLineItem {
            product: Product {
                id: ProductId::new(name),
                name: name.to_string(),
                price: Price::new(Decimal::new(price_cents, 2)).unwrap(),
                description: "A test product.".to_string(),
                rating: Rating::new(Decimal::new(40, 1)).unwrap(),
                image: ImageRef::parse("https://example.com/p.jpg"),
                category: CategoryId::new("Electronics"),
                tags: vec![],
                created_at: Utc::now(),
            },
            quantity,
        }
    }

    #[test]
    fn test_summary_lists_lines_and_total() {
        let items = vec![line("Headphones", 1000, 2), line("Bottle", 500, 3)];
        let summary = order_summary(&items);

        assert!(summary.contains("1. Headphones - 2 pcs - 20.00"));
        assert!(summary.contains("2. Bottle - 3 pcs - 15.00"));
        assert!(summary.contains("*Total:* 35.00"));
    }

    #[test]
    fn test_empty_cart_has_no_url() {
        assert!(whatsapp_url("15550000000", &[]).is_none());
    }

    #[test]
    fn test_url_targets_wa_me_with_encoded_text() {
        let items = vec![line("Headphones", 1000, 1)];
        let url = whatsapp_url("15550000000", &items).unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/15550000000");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(text.contains("Headphones"));
        assert!(text.contains("10.00"));
    }
}
