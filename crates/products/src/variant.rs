use serde::{Deserialize, Serialize};

use storefront_core::{Entity, VariantId};

/// A purchasable variant of a product (e.g. one sock color).
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    id: VariantId,
    color: String,
    image: String,
    quantity: u32,
}

impl Variant {
    pub fn new(id: VariantId, color: impl Into<String>, image: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            color: color.into(),
            image: image.into(),
            quantity,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Image URI/path shown while this variant is selected.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether at least one unit is left.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

impl Entity for Variant {
    type Id = VariantId;

    fn id(&self) -> VariantId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_only_with_stock_left() {
        assert!(Variant::new(VariantId::new(1), "green", "g.jpg", 1).is_available());
        assert!(!Variant::new(VariantId::new(2), "blue", "b.jpg", 0).is_available());
    }
}
