//! Built-in catalog.

use storefront_core::VariantId;

use crate::product::{Product, ProductDraft};
use crate::variant::Variant;

pub const GREEN_SOCKS: VariantId = VariantId::new(2234);
pub const BLUE_SOCKS: VariantId = VariantId::new(2235);

fn socks_draft() -> ProductDraft {
    ProductDraft {
        name: "Socks".to_string(),
        brand: "Vue Mastery".to_string(),
        description: "A pair of warm, fuzzy socks".to_string(),
        alt_text: "A pair of socks".to_string(),
        link: "https://www.amazon.com/s?k=socks".to_string(),
        on_sale: true,
        details: ["80% cotton", "20% polyester", "Gender-neutral"]
            .map(String::from)
            .to_vec(),
        sizes: ["S", "M", "L", "XL", "XXL"].map(String::from).to_vec(),
        variants: vec![
            Variant::new(GREEN_SOCKS, "green", "./assets/vmSocks-green-onWhite.jpg", 10),
            Variant::new(BLUE_SOCKS, "blue", "./assets/vmSocks-blue-onWhite.jpg", 0),
        ],
    }
}

/// The default product: socks in green (in stock) and blue (sold out).
pub fn socks() -> Product {
    match Product::new(socks_draft()) {
        Ok(product) => product,
        // The built-in draft has two distinct variants and always validates.
        Err(e) => unreachable!("built-in catalog is invalid: {e}"),
    }
}
