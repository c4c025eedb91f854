#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<u32> {
    /// Size after scaling to `height`, keeping the aspect ratio.
    ///
    /// The width is rounded to the nearest pixel and never drops below one, so
    /// for glyphs whose width would round to zero the ratio holds only within
    /// one pixel.
    /// Returns `None` when either side is zero, since the ratio is undefined.
    pub fn scaled_to_height(self, height: u32) -> Option<Size<u32>> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let width = (height as f64 * self.width as f64 / self.height as f64).round() as u32;
        Some(Size::new(width.max(1), height))
    }
}

/// Pixel rectangle with exclusive right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        BoundingBox {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size<u32> {
        Size::new(self.width(), self.height())
    }

    /// Grow the box so it covers pixel `(x, y)`.
    pub fn include(&mut self, x: u32, y: u32) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x + 1);
        self.bottom = self.bottom.max(y + 1);
    }

    /// Box of a single pixel.
    pub fn at(x: u32, y: u32) -> Self {
        BoundingBox::new(x, y, x + 1, y + 1)
    }

    pub fn covers(&self, size: Size<u32>) -> bool {
        self.left == 0 && self.top == 0 && self.right == size.width && self.bottom == size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_to_height_rounds() {
        assert_eq!(Size::new(40, 100).scaled_to_height(50), Some(Size::new(20, 50)));
        // 100 * 3 / 7 = 42.857
        assert_eq!(Size::new(3, 7).scaled_to_height(100), Some(Size::new(43, 100)));
        // 100 * 1 / 3 = 33.33
        assert_eq!(Size::new(1, 3).scaled_to_height(100), Some(Size::new(33, 100)));
    }

    #[test]
    fn test_scaled_to_height_never_zero_width() {
        assert_eq!(Size::new(1, 1000).scaled_to_height(10), Some(Size::new(1, 10)));
    }

    #[test]
    fn test_scaled_to_height_degenerate() {
        assert_eq!(Size::new(0, 10).scaled_to_height(10), None);
        assert_eq!(Size::new(10, 0).scaled_to_height(10), None);
    }

    #[test]
    fn test_bounding_box_include() {
        let mut bbox = BoundingBox::at(5, 5);
        bbox.include(2, 7);
        bbox.include(9, 3);
        assert_eq!(bbox, BoundingBox::new(2, 3, 10, 8));
        assert_eq!(bbox.size(), Size::new(8, 5));
    }

    #[test]
    fn test_bounding_box_covers() {
        assert!(BoundingBox::new(0, 0, 4, 3).covers(Size::new(4, 3)));
        assert!(!BoundingBox::new(1, 0, 4, 3).covers(Size::new(4, 3)));
    }
}
