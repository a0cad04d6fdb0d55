// src/model/ledger.rs

/// Running on-hand balance of the single stocked item.
///
/// The balance is not floored at zero; whatever `fulfill` leaves behind is
/// carried into the next day unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockLedger {
    pub on_hand: f64,
}

impl StockLedger {
    pub fn new(initial_stock: f64) -> Self {
        Self {
            on_hand: initial_stock,
        }
    }

    /// Step 1: goods arrive and are added to stock.
    pub fn receive(&mut self, quantity: f64) {
        self.on_hand += quantity;
    }

    /// Step 2: serve the day's demand out of what is on hand.
    ///
    /// Returns the quantity sold, `min(on_hand, demand)`.
    pub fn fulfill(&mut self, demand: f64) -> f64 {
        let sales = self.on_hand.min(demand);
        self.on_hand -= sales;
        sales
    }

    /// True when the balance after fulfilment is negative.
    pub fn is_short(&self) -> bool {
        self.on_hand < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sells_full_demand_when_stock_covers_it() {
        let mut ledger = StockLedger::new(10.0);
        let sales = ledger.fulfill(4.0);
        assert_eq!(sales, 4.0);
        assert_eq!(ledger.on_hand, 6.0);
        assert!(!ledger.is_short());
    }

    #[test]
    fn sells_only_what_is_on_hand() {
        let mut ledger = StockLedger::new(3.0);
        ledger.receive(1.0);
        let sales = ledger.fulfill(5.0);
        assert_eq!(sales, 4.0);
        assert_eq!(ledger.on_hand, 0.0);
    }

    #[test]
    fn negative_balance_is_carried_not_floored() {
        let mut ledger = StockLedger::new(-2.0);
        let sales = ledger.fulfill(5.0);
        assert_eq!(sales, -2.0);
        assert_eq!(ledger.on_hand, 0.0);
        assert!(!ledger.is_short());
    }
}
