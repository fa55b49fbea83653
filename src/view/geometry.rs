// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas-space geometry. `y` grows downwards.

use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Self> {
        let length = self.length();
        if length <= f32::EPSILON {
            return None;
        }
        Some(self.scale(1.0 / length))
    }

    /// The vector rotated a quarter turn.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A rectangle of `size` whose center is `center`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }

    pub fn x_min(&self) -> f32 {
        self.origin.x
    }

    pub fn x_max(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn y_min(&self) -> f32 {
        self.origin.y
    }

    pub fn y_max(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Midpoint of the right edge; where outgoing connections start.
    pub fn right_mid(&self) -> Point {
        Point::new(self.x_max(), self.center().y)
    }

    /// Midpoint of the left edge; where incoming connections end.
    pub fn left_mid(&self) -> Point {
        Point::new(self.x_min(), self.center().y)
    }

    /// Half-open containment: the left and top edges are inside, the right and bottom are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min()
            && point.x < self.x_max()
            && point.y >= self.y_min()
            && point.y < self.y_max()
    }
}
