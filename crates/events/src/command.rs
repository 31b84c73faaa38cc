use storefront_core::VariantId;

/// A request to change state, aimed at one variant.
///
/// Commands represent **intent** (e.g. "add variant 2234 to the cart"). They
/// are transient; the aggregate that handles them turns accepted intent into
/// events.
///
/// - **Command**: "Add 2234 to the cart"
/// - **Event**: "2234 was added to the cart"
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    fn target_variant(&self) -> VariantId;
}
