use num_traits::Num;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle<T = f64> {
    pub width: T,
    pub height: T,
}

impl<T: Num + Copy> Rectangle<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> T {
        self.width * self.height
    }
}
