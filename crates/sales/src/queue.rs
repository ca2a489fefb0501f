use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::order::Order;

/// Orders that had enough stock when submitted. Strict FIFO.
#[derive(Debug, Clone, Default)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    pub fn dequeue(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    pub fn peek(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Head first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Orders that lacked stock when submitted, served smallest [`OrderKey`] first.
///
/// [`OrderKey`]: crate::order::OrderKey
#[derive(Debug, Clone, Default)]
pub struct BackorderQueue {
    heap: BinaryHeap<Reverse<Order>>,
}

impl BackorderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, order: Order) {
        self.heap.push(Reverse(order));
    }

    pub fn peek_min(&self) -> Option<&Order> {
        self.heap.peek().map(|Reverse(order)| order)
    }

    pub fn pop_min(&mut self) -> Option<Order> {
        self.heap.pop().map(|Reverse(order)| order)
    }

    /// Snapshot in service order.
    pub fn iter_sorted(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.heap.iter().map(|Reverse(order)| *order).collect();
        orders.sort();
        orders
    }

    /// Remove every order, in service order.
    pub(crate) fn drain_sorted(&mut self) -> Vec<Order> {
        let mut orders = Vec::with_capacity(self.heap.len());
        while let Some(order) = self.pop_min() {
            orders.push(order);
        }
        orders
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
