use serde::{Deserialize, Serialize};

use storefront_core::{Aggregate, AggregateRoot, DomainError, VariantId};
use storefront_events::Command;

/// Aggregate root: Cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<VariantId>,
    version: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[VariantId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries for one variant.
    pub fn count_of(&self, variant_id: VariantId) -> usize {
        self.entries.iter().filter(|id| **id == variant_id).count()
    }
}

impl AggregateRoot for Cart {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddToCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    pub variant_id: VariantId,
}

/// Command: RemoveFromCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromCart {
    pub variant_id: VariantId,
}

/// Cart-mutation request emitted by the product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddToCart(AddToCart),
    RemoveFromCart(RemoveFromCart),
}

impl CartCommand {
    pub fn add(variant_id: VariantId) -> Self {
        CartCommand::AddToCart(AddToCart { variant_id })
    }

    pub fn remove(variant_id: VariantId) -> Self {
        CartCommand::RemoveFromCart(RemoveFromCart { variant_id })
    }
}

impl Command for CartCommand {
    fn target_variant(&self) -> VariantId {
        match self {
            CartCommand::AddToCart(cmd) => cmd.variant_id,
            CartCommand::RemoveFromCart(cmd) => cmd.variant_id,
        }
    }
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub variant_id: VariantId,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub variant_id: VariantId,
    /// Index the entry occupied before removal.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.entries.push(e.variant_id);
            }
            CartEvent::ItemRemoved(e) => {
                if self.entries.get(e.position) == Some(&e.variant_id) {
                    self.entries.remove(e.position);
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddToCart(cmd) => Ok(vec![CartEvent::ItemAdded(ItemAdded {
                variant_id: cmd.variant_id,
            })]),
            CartCommand::RemoveFromCart(cmd) => Ok(self.handle_remove(cmd)),
        }
    }
}

impl Cart {
    fn handle_remove(&self, cmd: &RemoveFromCart) -> Vec<CartEvent> {
        // Only the first matching entry goes; an absent id is not an error.
        match self.entries.iter().position(|id| *id == cmd.variant_id) {
            Some(position) => vec![CartEvent::ItemRemoved(ItemRemoved {
                variant_id: cmd.variant_id,
                position,
            })],
            None => {
                tracing::debug!(variant_id = %cmd.variant_id, "remove ignored; not in cart");
                vec![]
            }
        }
    }
}
