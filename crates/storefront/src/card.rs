//! The product card.
//!
//! Owns the product (and its variant selection) plus every review received
//! on the channel. Cart changes are not applied here: the card returns a
//! `CartCommand` for the root to execute.

use std::sync::{Arc, Mutex, PoisonError};

use storefront_cart::CartCommand;
use storefront_core::{DomainResult, Entity, VariantId};
use storefront_events::{EventChannel, EventEnvelope};
use storefront_products::{Product, ShippingCost, StockStatus, derived};
use storefront_reviews::{REVIEW_SUBMITTED, Review};

use crate::details::DetailsList;
use crate::tabs::{TabContent, TabPanel};

/// A color swatch; hovering it selects the variant at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub index: usize,
    pub variant_id: VariantId,
    pub color: String,
}

/// Snapshot of everything the card displays, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub sale_message: String,
    pub active_image: String,
    pub alt_text: String,
    pub link: String,
    pub in_stock: bool,
    pub stock: StockStatus,
    pub shipping: ShippingCost,
    pub selected_index: usize,
    pub swatches: Vec<Swatch>,
    pub review_count: usize,
}

#[derive(Debug)]
pub struct ProductCard {
    product: Product,
    premium: bool,
    reviews: Arc<Mutex<Vec<Review>>>,
}

impl ProductCard {
    /// Create the card and subscribe it to `"review-submitted"` on `channel`.
    ///
    /// The subscription lasts as long as the channel. Every delivered review
    /// is appended, duplicates included.
    pub fn mount<C>(product: Product, premium: bool, channel: &C) -> Result<Self, C::Error>
    where
        C: EventChannel<Review>,
    {
        let reviews = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reviews);
        channel.subscribe(
            REVIEW_SUBMITTED,
            Arc::new(move |envelope: &EventEnvelope<Review>| {
                let mut reviews = sink.lock().unwrap_or_else(PoisonError::into_inner);
                reviews.push(envelope.payload().clone());
                tracing::debug!(
                    sequence_number = envelope.sequence_number(),
                    occurred_at = %envelope.occurred_at(),
                    total = reviews.len(),
                    "review received"
                );
            }),
        )?;

        Ok(Self {
            product,
            premium,
            reviews,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    /// Reviews received so far, oldest first.
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn title(&self) -> String {
        derived::title(&self.product)
    }

    pub fn sale_message(&self) -> String {
        derived::sale_message(&self.product)
    }

    pub fn active_image(&self) -> &str {
        derived::active_image(&self.product)
    }

    pub fn in_stock(&self) -> bool {
        derived::in_stock(&self.product)
    }

    pub fn shipping_cost(&self) -> ShippingCost {
        derived::shipping_cost(self.premium)
    }

    /// Hover handler for the swatch at `index`.
    pub fn select_variant(&mut self, index: usize) -> DomainResult<()> {
        self.product.select_variant(index)
    }

    /// "Add to cart" request for the selected variant; `None` while it is out of stock.
    pub fn add_to_cart(&self) -> Option<CartCommand> {
        if !self.in_stock() {
            tracing::debug!(variant_id = %self.product.selected_id(), "add ignored; out of stock");
            return None;
        }
        Some(CartCommand::add(self.product.selected_id()))
    }

    /// "Remove from cart" request for the selected variant, whatever its stock.
    pub fn remove_from_cart(&self) -> CartCommand {
        CartCommand::remove(self.product.selected_id())
    }

    pub fn details(&self) -> DetailsList {
        DetailsList::new(self.product.details().to_vec())
    }

    /// Content of `panel`'s selected tab, fed with this card's state.
    pub fn tab_content(&self, panel: &TabPanel) -> TabContent {
        panel.content(self.reviews(), self.shipping_cost(), self.details())
    }

    pub fn view(&self) -> CardView {
        let product = &self.product;
        CardView {
            title: self.title(),
            description: product.description().to_string(),
            sale_message: self.sale_message(),
            active_image: self.active_image().to_string(),
            alt_text: product.alt_text().to_string(),
            link: product.link().to_string(),
            in_stock: self.in_stock(),
            stock: derived::stock_status(product),
            shipping: self.shipping_cost(),
            selected_index: product.selected_index(),
            swatches: product
                .variants()
                .iter()
                .enumerate()
                .map(|(index, v)| Swatch {
                    index,
                    variant_id: v.id(),
                    color: v.color().to_string(),
                })
                .collect(),
            review_count: self.review_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use storefront_cart::{AddToCart, RemoveFromCart};
    use storefront_events::InMemoryChannel;
    use storefront_products::catalog::{BLUE_SOCKS, GREEN_SOCKS};
    use storefront_products::socks;
    use storefront_reviews::{Rating, Recommendation, ReviewForm};

    use super::*;

    fn mounted(premium: bool) -> (ProductCard, Arc<InMemoryChannel<Review>>) {
        let channel = Arc::new(InMemoryChannel::new());
        let card = ProductCard::mount(socks(), premium, &channel).unwrap();
        (card, channel)
    }

    #[test]
    fn mount_subscribes_once() {
        let (_card, channel) = mounted(true);
        assert_eq!(channel.subscriber_count(REVIEW_SUBMITTED), 1);
    }

    #[test]
    fn view_reflects_selected_variant() {
        let (mut card, _channel) = mounted(false);
        let view = card.view();
        assert_eq!(view.title, "Vue Mastery Socks");
        assert_eq!(view.sale_message, "Vue Mastery Socks are on sale!");
        assert_eq!(view.active_image, "./assets/vmSocks-green-onWhite.jpg");
        assert!(view.in_stock);
        assert_eq!(view.stock.label(), "In Stock");
        assert_eq!(view.shipping.label(), "$2.99");
        assert_eq!(view.swatches.len(), 2);
        assert_eq!(view.swatches[1].color, "blue");

        card.select_variant(1).unwrap();
        let view = card.view();
        assert_eq!(view.active_image, "./assets/vmSocks-blue-onWhite.jpg");
        assert!(!view.in_stock);
        assert_eq!(view.stock.label(), "Out of Stock");
        assert_eq!(view.selected_index, 1);
    }

    #[test]
    fn add_is_suppressed_when_out_of_stock() {
        let (mut card, _channel) = mounted(true);
        assert_eq!(
            card.add_to_cart(),
            Some(CartCommand::AddToCart(AddToCart { variant_id: GREEN_SOCKS }))
        );

        card.select_variant(1).unwrap();
        assert_eq!(card.add_to_cart(), None);
    }

    #[test]
    fn remove_ignores_stock() {
        let (mut card, _channel) = mounted(true);
        card.select_variant(1).unwrap();
        assert_eq!(
            card.remove_from_cart(),
            CartCommand::RemoveFromCart(RemoveFromCart { variant_id: BLUE_SOCKS })
        );
    }

    #[test]
    fn premium_controls_shipping_only() {
        let (free, _a) = mounted(true);
        let (paid, _b) = mounted(false);
        assert_eq!(free.shipping_cost(), ShippingCost::Free);
        assert_eq!(paid.shipping_cost(), ShippingCost::Standard);
        assert_eq!(free.title(), paid.title());
    }

    #[test]
    fn appends_every_published_review_including_duplicates() {
        let (card, channel) = mounted(true);
        let mut form = ReviewForm::new(Arc::clone(&channel));

        for _ in 0..2 {
            form.set_name("Alice");
            form.set_text("Great!");
            form.set_rating(Some(Rating::new(5).unwrap()));
            form.set_recommend(Some(Recommendation::Yes));
            assert!(form.submit().unwrap().is_submitted());
        }

        let reviews = card.reviews();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0], reviews[1]);
        assert_eq!(card.view().review_count, 2);
    }

    #[test]
    fn review_tab_renders_received_reviews() {
        let (card, channel) = mounted(true);
        let mut form = ReviewForm::new(Arc::clone(&channel));
        form.set_name("Bob");
        form.set_text("Itchy");
        form.set_rating(Some(Rating::new(2).unwrap()));
        form.set_recommend(Some(Recommendation::No));
        form.submit().unwrap();

        let lines = card.tab_content(&TabPanel::new()).lines();
        assert_eq!(lines, vec!["Bob", "Rating: 2", "Itchy", "Recommend: no"]);
    }
}
