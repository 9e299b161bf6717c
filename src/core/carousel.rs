//! Cyclic index for the testimonial carousel

/// Auto-advance period of the testimonial carousel
pub const AUTO_ADVANCE_MS: u64 = 5000;

/// Current slide of a carousel with `len` slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_zero() {
        let mut carousel = Carousel::new(5);
        carousel.select(4);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(5);
        carousel.prev();
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut carousel = Carousel::new(3);
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.current(), 0);
        for _ in 0..6 {
            carousel.prev();
        }
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        carousel.select(3);
        assert_eq!(carousel.current(), 2);
        assert!(carousel.is_current(2));
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_empty());
        assert!(!carousel.is_current(0));
    }

    #[test]
    fn test_single_slide() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.prev();
        assert_eq!(carousel.current(), 0);
    }
}
