// src/strategy/traits.rs

use std::fmt::Debug;

/// State visible to a policy when it decides whether to order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderContext {
    /// Stock on hand before today's receipts.
    pub on_hand: f64,
    /// Quantity ordered earlier and not yet delivered.
    pub in_transit: f64,
}

/// Decides how much to order on a given day.
///
/// `Send + Sync` so independent runs can be moved across threads.
pub trait OrderPolicy: Debug + Send + Sync {
    /// Quantity to order on `day` (1-indexed). Zero means no order.
    fn calculate_order(&mut self, day: u32, context: &OrderContext) -> f64;
}
