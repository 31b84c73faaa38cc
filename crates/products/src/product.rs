use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, VariantId};

use crate::variant::Variant;

/// Unvalidated product data, as read from a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub description: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub variants: Vec<Variant>,
}

/// A product with its variant catalog and the currently selected variant.
///
/// The selection is the only mutable part; it always indexes a live variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    brand: String,
    description: String,
    alt_text: String,
    link: String,
    on_sale: bool,
    details: Vec<String>,
    sizes: Vec<String>,
    variants: Vec<Variant>,
    selected: usize,
}

impl TryFrom<ProductDraft> for Product {
    type Error = DomainError;

    fn try_from(draft: ProductDraft) -> DomainResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if draft.variants.is_empty() {
            return Err(DomainError::validation("product needs at least one variant"));
        }

        let mut seen = HashSet::new();
        for variant in &draft.variants {
            if !seen.insert(variant.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate variant id {}",
                    variant.id()
                )));
            }
        }

        Ok(Self {
            name: draft.name,
            brand: draft.brand,
            description: draft.description,
            alt_text: draft.alt_text,
            link: draft.link,
            on_sale: draft.on_sale,
            details: draft.details,
            sizes: draft.sizes,
            variants: draft.variants,
            selected: 0,
        })
    }
}

impl Product {
    /// Build a product from a draft, starting with the first variant selected.
    pub fn new(draft: ProductDraft) -> DomainResult<Self> {
        Self::try_from(draft)
    }

    /// Parse and validate a product from its JSON catalog representation.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let draft: ProductDraft =
            serde_json::from_str(json).map_err(|e| DomainError::validation(format!("catalog: {e}")))?;
        Self::try_from(draft)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// "More products like this" link.
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn on_sale(&self) -> bool {
        self.on_sale
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_variant(&self) -> &Variant {
        // `selected` is only ever set to a checked index.
        &self.variants[self.selected]
    }

    pub fn selected_id(&self) -> VariantId {
        self.selected_variant().id()
    }

    /// Select the variant at `index` (the card selects on hover).
    ///
    /// An out-of-range index is rejected and the current selection is kept.
    pub fn select_variant(&mut self, index: usize) -> DomainResult<()> {
        if index >= self.variants.len() {
            return Err(DomainError::invariant(format!(
                "variant index {index} out of range (catalog has {})",
                self.variants.len()
            )));
        }
        self.selected = index;
        tracing::debug!(index, variant_id = %self.selected_id(), "variant selected");
        Ok(())
    }
}
