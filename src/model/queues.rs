// src/model/queues.rs

use std::collections::VecDeque;

/// An order that has been placed but not yet delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOrder {
    /// Wider than a day number so `placement + lead time` cannot overflow.
    pub arrival_day: u64,
    pub quantity: f64,
}

/// Outstanding orders kept sorted by arrival day.
///
/// With a fixed lead time orders are pushed in arrival order, so `push` is
/// an append in practice and `pop_arrivals` only ever looks at the front.
#[derive(Debug, Clone, Default)]
pub struct PendingOrderQueue {
    orders: VecDeque<PendingOrder>,
}

impl PendingOrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an order. Orders sharing an arrival day keep placement order.
    pub fn push(&mut self, order: PendingOrder) {
        let at = self
            .orders
            .partition_point(|queued| queued.arrival_day <= order.arrival_day);
        self.orders.insert(at, order);
    }

    /// Remove every order due on `day` and return their summed quantity.
    /// Coinciding arrivals accumulate.
    ///
    /// Days must be drained in order; an order is never left overdue.
    pub fn pop_arrivals(&mut self, day: u32) -> f64 {
        let day = u64::from(day);
        let mut received = 0.0;
        while let Some(front) = self.orders.front() {
            debug_assert!(
                front.arrival_day >= day,
                "order due on day {} left undelivered",
                front.arrival_day
            );
            if front.arrival_day != day {
                break;
            }
            received += front.quantity;
            self.orders.pop_front();
        }
        received
    }

    /// Total quantity ordered but not yet delivered.
    pub fn in_transit(&self) -> f64 {
        self.orders.iter().map(|order| order.quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
