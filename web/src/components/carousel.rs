/// Position within a fixed, non-empty ring of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Hero slides advance on their own at this interval.
    pub const AUTO_ADVANCE_MS: u64 = 7000;

    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Out-of-range indices wrap around.
    pub fn go_to(&mut self, index: usize) {
        self.current = index % self.len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first_slide() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn previous_from_first_goes_to_last() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn go_to_wraps_out_of_range_index() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(4);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn empty_ring_is_treated_as_single_slide() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.len(), 1);
    }
}
