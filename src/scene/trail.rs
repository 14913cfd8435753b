//! Bounded history of a point's screen positions

use std::collections::VecDeque;

use clothnet_math::Vec2;

/// Recent screen positions of a point, oldest first
#[derive(Clone, Debug)]
pub struct Trail {
    positions: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    /// Create a trail holding at most `capacity` positions (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            positions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a position, dropping the oldest when full
    pub fn record(&mut self, position: Vec2) {
        if self.positions.len() == self.capacity {
            self.positions.pop_front();
        }
        self.positions.push_back(position);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> + '_ {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
