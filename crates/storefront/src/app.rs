//! Root of the widget.
//!
//! Owns the cart and the premium flag, builds the review channel once, and
//! hands it to exactly two components: the card (subscriber) and the review
//! form (publisher).

use std::sync::Arc;

use anyhow::Context;

use storefront_cart::{Cart, CartCommand, CartEvent};
use storefront_core::{DomainResult, VariantId};
use storefront_events::{ChannelError, Command, InMemoryChannel, execute};
use storefront_products::{Product, socks};
use storefront_reviews::{Review, ReviewForm, SubmitOutcome};

use crate::card::ProductCard;
use crate::config::StorefrontConfig;
use crate::tabs::{Tab, TabContent, TabPanel};

/// Channel carrying submitted reviews from the form to the card.
pub type ReviewChannel = Arc<InMemoryChannel<Review>>;

#[derive(Debug)]
pub struct App {
    premium: bool,
    cart: Cart,
    card: ProductCard,
    tabs: TabPanel,
    form: ReviewForm<ReviewChannel>,
}

impl App {
    /// Wire up the widget for `product`.
    pub fn new(product: Product, premium: bool) -> Result<Self, ChannelError> {
        let channel: ReviewChannel = Arc::new(InMemoryChannel::new());
        let card = ProductCard::mount(product, premium, &channel)?;
        let form = ReviewForm::new(channel);

        Ok(Self {
            premium,
            cart: Cart::new(),
            card,
            tabs: TabPanel::new(),
            form,
        })
    }

    /// Load the configured catalog (or the built-in one) and build the widget.
    pub fn bootstrap(config: &StorefrontConfig) -> anyhow::Result<Self> {
        let product = load_product(config)?;
        let app = Self::new(product, config.premium).context("wiring review channel")?;
        tracing::info!(
            product = %app.card.title(),
            premium = config.premium,
            "storefront ready"
        );
        Ok(app)
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart counter text, e.g. `"Cart(2)"`.
    pub fn cart_label(&self) -> String {
        format!("Cart({})", self.cart.len())
    }

    pub fn card(&self) -> &ProductCard {
        &self.card
    }

    pub fn tabs(&self) -> &TabPanel {
        &self.tabs
    }

    pub fn form(&self) -> &ReviewForm<ReviewChannel> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReviewForm<ReviewChannel> {
        &mut self.form
    }

    /// Apply a cart request coming up from the card.
    pub fn dispatch(&mut self, command: CartCommand) -> DomainResult<Vec<CartEvent>> {
        let events = execute(&mut self.cart, &command)?;
        tracing::debug!(
            variant_id = %command.target_variant(),
            applied = events.len(),
            cart_len = self.cart.len(),
            "cart updated"
        );
        Ok(events)
    }

    /// Append `id` to the cart (duplicates allowed).
    pub fn handle_add(&mut self, id: VariantId) -> DomainResult<()> {
        self.dispatch(CartCommand::add(id)).map(|_| ())
    }

    /// Remove the first occurrence of `id`; absent ids are ignored.
    pub fn handle_remove(&mut self, id: VariantId) -> DomainResult<()> {
        self.dispatch(CartCommand::remove(id)).map(|_| ())
    }

    /// Mouse-over on the swatch at `index`.
    pub fn hover_variant(&mut self, index: usize) -> DomainResult<()> {
        self.card.select_variant(index)
    }

    /// "Add to cart" button; does nothing while the selection is out of stock.
    pub fn click_add_to_cart(&mut self) -> DomainResult<()> {
        match self.card.add_to_cart() {
            Some(command) => self.dispatch(command).map(|_| ()),
            None => Ok(()),
        }
    }

    pub fn click_remove_from_cart(&mut self) -> DomainResult<()> {
        let command = self.card.remove_from_cart();
        self.dispatch(command).map(|_| ())
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tabs.select_tab(tab);
    }

    pub fn submit_review(&mut self) -> Result<SubmitOutcome, ChannelError> {
        self.form.submit()
    }

    pub fn tab_content(&self) -> TabContent {
        self.card.tab_content(&self.tabs)
    }
}

/// Host entry point: install logging per `config`, then build the widget.
pub fn start(config: &StorefrontConfig) -> anyhow::Result<App> {
    storefront_observability::tracing::init(&config.log);
    App::bootstrap(config)
}

fn load_product(config: &StorefrontConfig) -> anyhow::Result<Product> {
    let Some(path) = &config.catalog_path else {
        return Ok(socks());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    Product::from_json(&json).with_context(|| format!("parsing catalog {}", path.display()))
}
