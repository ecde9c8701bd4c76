//! egui interoperability
//!
//! This module lets egui's screen-space vector types take part in
//! [`convert`](crate::convert), so the viewer can hand pixel positions to and
//! from the capture pipeline without touching components by hand.

use crate::traits::VectorComponents;
use egui::{Pos2, Vec2};

impl VectorComponents for Pos2 {
    type Components = [f32; 2];

    fn to_components(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    fn from_components([x, y]: [f32; 2]) -> Self {
        Pos2::new(x, y)
    }
}

impl VectorComponents for Vec2 {
    type Components = [f32; 2];

    fn to_components(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    fn from_components([x, y]: [f32; 2]) -> Self {
        Vec2::new(x, y)
    }
}
