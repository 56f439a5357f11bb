//! Checkout via WhatsApp deep link.

use url::Url;

use storefront_products::Product;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Deep link that opens a WhatsApp chat with `number`, pre-filled with an
/// interest message for `product`.
pub fn whatsapp_link(number: &str, product: &Product) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(WHATSAPP_BASE)?.join(number.trim())?;
    url.query_pairs_mut()
        .append_pair("text", &format!("I'm interested in {}", product.name));
    Ok(url)
}
