use crate::float_eq::FloatEquality;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Rectangle given by its top-left corner and its size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

/// Distances from each side of a rectangle, such as paddings or borders.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Rect {
    pub const ZERO: Self = Self::new(Point::ZERO, Size::ZERO);

    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Shrink the rectangle by `insets`. Negative insets grow it.
    pub fn inset_by(&self, insets: EdgeInsets) -> Rect {
        Rect {
            origin: Point::new(self.origin.x + insets.left, self.origin.y + insets.top),
            size: Size::new(
                self.size.width - insets.horizontal(),
                self.size.height - insets.vertical(),
            ),
        }
    }
}

impl EdgeInsets {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl FloatEquality for Point {
    fn float_eq_eps(&self, other: Point, epsilon: f32) -> bool {
        self.x.float_eq_eps(other.x, epsilon) && self.y.float_eq_eps(other.y, epsilon)
    }
}

impl FloatEquality for Size {
    fn float_eq_eps(&self, other: Size, epsilon: f32) -> bool {
        self.width.float_eq_eps(other.width, epsilon)
            && self.height.float_eq_eps(other.height, epsilon)
    }
}

impl FloatEquality for Rect {
    fn float_eq_eps(&self, other: Rect, epsilon: f32) -> bool {
        self.origin.float_eq_eps(other.origin, epsilon)
            && self.size.float_eq_eps(other.size, epsilon)
    }
}

impl FloatEquality for EdgeInsets {
    fn float_eq_eps(&self, other: EdgeInsets, epsilon: f32) -> bool {
        self.left.float_eq_eps(other.left, epsilon)
            && self.top.float_eq_eps(other.top, epsilon)
            && self.right.float_eq_eps(other.right, epsilon)
            && self.bottom.float_eq_eps(other.bottom, epsilon)
    }
}
