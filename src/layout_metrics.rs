use crate::{
    float_eq::FloatEquality,
    geometry::{EdgeInsets, Point, Rect, Size},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayType {
    None,
    #[default]
    Flex,
    Inline,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    Undefined,
    LeftToRight,
    RightToLeft,
}

/// Outcome of a layout pass for a single node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub frame: Rect,
    pub content_insets: EdgeInsets,
    pub border_width: EdgeInsets,
    pub display_type: DisplayType,
    pub layout_direction: LayoutDirection,
    pub point_scale_factor: f32,
}

impl LayoutMetrics {
    /// Metrics of a node that was never laid out, its size is `-1 x -1`.
    pub const EMPTY: Self = Self {
        frame: Rect::new(Point::ZERO, Size::new(-1.0, -1.0)),
        content_insets: EdgeInsets::ZERO,
        border_width: EdgeInsets::ZERO,
        display_type: DisplayType::Flex,
        layout_direction: LayoutDirection::Undefined,
        point_scale_factor: 1.0,
    };

    /// Frame of the content area, relative to the node's own frame.
    pub fn content_frame(&self) -> Rect {
        Rect::new(Point::ZERO, self.frame.size).inset_by(self.content_insets)
    }

    /// Whether `other` differs by more than floating point noise.
    pub fn has_changed(&self, other: &LayoutMetrics) -> bool {
        !self.float_eq(*other)
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FloatEquality for LayoutMetrics {
    fn float_eq_eps(&self, other: LayoutMetrics, epsilon: f32) -> bool {
        self.display_type == other.display_type
            && self.layout_direction == other.layout_direction
            && self.frame.float_eq_eps(other.frame, epsilon)
            && self.content_insets.float_eq_eps(other.content_insets, epsilon)
            && self.border_width.float_eq_eps(other.border_width, epsilon)
            && self
                .point_scale_factor
                .float_eq_eps(other.point_scale_factor, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        float_eq::FloatEquality,
        geometry::{EdgeInsets, Point, Rect, Size},
    };

    use super::{DisplayType, LayoutDirection, LayoutMetrics};

    fn laid_out() -> LayoutMetrics {
        LayoutMetrics {
            frame: Rect::new(Point::new(8.0, 16.0), Size::new(120.0, 48.0)),
            content_insets: EdgeInsets::new(4.0, 2.0, 4.0, 2.0),
            border_width: EdgeInsets::uniform(1.0),
            display_type: DisplayType::Flex,
            layout_direction: LayoutDirection::LeftToRight,
            point_scale_factor: 2.0,
        }
    }

    #[test]
    fn empty_is_unchanged() {
        assert!(!LayoutMetrics::EMPTY.has_changed(&LayoutMetrics::EMPTY));
        assert_eq!(LayoutMetrics::default(), LayoutMetrics::EMPTY);
        assert!(LayoutMetrics::EMPTY.has_changed(&laid_out()));
    }

    #[test]
    fn rounding_noise_is_not_a_change() {
        let before = laid_out();
        let mut after = before;
        after.frame.origin.x += 0.001;
        after.frame.size.height -= 0.002;
        after.content_insets.left += 0.0001;
        assert!(!before.has_changed(&after));
        assert!(!after.has_changed(&before));

        after.frame.size.width += 0.5;
        assert!(before.has_changed(&after));
        assert!(!before.float_eq_eps(after, 0.1));
        assert!(before.float_eq_eps(after, 1.0));
    }

    #[test]
    fn discrete_fields_must_match() {
        let before = laid_out();
        let mut after = before;
        after.display_type = DisplayType::None;
        assert!(before.has_changed(&after));
        assert!(!before.float_eq_eps(after, f32::MAX));

        let mut after = before;
        after.layout_direction = LayoutDirection::RightToLeft;
        assert!(before.has_changed(&after));
    }

    #[test]
    fn scale_factor_and_borders() {
        let before = laid_out();
        let mut after = before;
        after.point_scale_factor = 3.0;
        assert!(before.has_changed(&after));

        let mut after = before;
        after.border_width.bottom = 2.0;
        assert!(before.has_changed(&after));
    }

    #[test]
    fn undefined_frame_stays_unchanged() {
        let mut metrics = laid_out();
        metrics.frame.size = Size::new(f32::NAN, f32::NAN);
        assert!(!metrics.has_changed(&metrics));
        assert!(metrics.has_changed(&laid_out()));
    }

    #[test]
    fn content_frame() {
        let metrics = laid_out();
        let content = metrics.content_frame();
        assert!(content.float_eq(Rect::new(Point::new(4.0, 2.0), Size::new(112.0, 44.0))));
    }
}
