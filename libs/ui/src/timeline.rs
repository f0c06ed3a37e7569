/// Scroll-linked process timeline.
///
/// The reading line sits at the vertical middle of the viewport. As the
/// container scrolls past it, progress runs from 0 to 1 and the item
/// under the line becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTimeline {
    items: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFrame {
    pub progress: f32,
    pub active: usize,
    /// Signed distance of the reading line from each item's centre, in
    /// item heights, clamped to `[-1, 1]`.
    pub offsets: Vec<f32>,
}

impl ScrollTimeline {
    pub fn new(items: usize) -> Option<Self> {
        (items > 0).then_some(Self { items })
    }

    pub fn items(&self) -> usize {
        self.items
    }

    /// `container_top` is the container's top edge relative to the
    /// viewport, as `getBoundingClientRect().top` reports it.
    pub fn frame(
        &self,
        container_top: f32,
        container_height: f32,
        viewport_height: f32,
    ) -> TimelineFrame {
        let scrolled = viewport_height / 2.0 - container_top;
        let progress = if container_height > 0.0 {
            (scrolled / container_height).clamp(0.0, 1.0)
        } else if scrolled >= 0.0 {
            1.0
        } else {
            0.0
        };

        let position = progress * self.items as f32;
        let active = (position.floor() as usize).min(self.items - 1);
        let offsets = (0..self.items)
            .map(|i| (position - (i as f32 + 0.5)).clamp(-1.0, 1.0))
            .collect();

        TimelineFrame {
            progress,
            active,
            offsets,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_timeline() {
        assert!(ScrollTimeline::new(0).is_none());
    }

    #[test]
    fn test_before_and_after_container() {
        let timeline = ScrollTimeline::new(4).unwrap();

        let before = timeline.frame(900.0, 1000.0, 800.0);
        assert_eq!(before.progress, 0.0);
        assert_eq!(before.active, 0);

        let after = timeline.frame(-2000.0, 1000.0, 800.0);
        assert_eq!(after.progress, 1.0);
        assert_eq!(after.active, 3);
    }

    #[test]
    fn test_midway() {
        let timeline = ScrollTimeline::new(4).unwrap();

        // Reading line at 400, container top at -225: 625 of 1000.
        let frame = timeline.frame(-225.0, 1000.0, 800.0);

        assert_eq!(frame.progress, 0.625);
        assert_eq!(frame.active, 2);
        assert_eq!(frame.offsets, vec![1.0, 1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_active_always_in_range() {
        let timeline = ScrollTimeline::new(5).unwrap();

        for top in (-3000..3000).step_by(37) {
            let frame = timeline.frame(top as f32, 1200.0, 700.0);
            assert!(frame.active < 5);
            assert!((0.0..=1.0).contains(&frame.progress));
            assert!(frame.offsets.iter().all(|o| (-1.0..=1.0).contains(o)));
        }
    }

    #[test]
    fn test_zero_height_container() {
        let timeline = ScrollTimeline::new(2).unwrap();

        assert_eq!(timeline.frame(100.0, 0.0, 800.0).progress, 1.0);
        assert_eq!(timeline.frame(500.0, 0.0, 800.0).progress, 0.0);
    }
}
