//! A minimal retained scene: a list of drawables plus a one-shot timer that
//! asks for a full redraw some time after the last addition.

use std::time::Duration;

use egui::Painter;

use crate::util::time;

/// Anything that can paint itself
pub trait Drawable {
    fn draw(&self, painter: &Painter);
}

/// Default delay between the last addition and the redraw
pub const DEFAULT_REDRAW_DELAY: Duration = Duration::from_secs(5);

/// One-shot timer measured in seconds on any monotonic clock the caller picks.
/// Restarting pushes the deadline out; it fires at most once per restart.
#[derive(Debug, Clone, PartialEq)]
pub struct RedrawTimer {
    delay: Duration,
    deadline: Option<f64>,
}

impl Default for RedrawTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REDRAW_DELAY)
    }
}

impl RedrawTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn restart(&mut self, now: f64) {
        self.deadline = Some(now + self.delay.as_secs_f64());
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: f64) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Returns true exactly once when the deadline has passed
    pub fn take_due(&mut self, now: f64) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Time left until the deadline, if armed
    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.deadline
            .map(|deadline| Duration::from_secs_f64((deadline - now).max(0.0)))
    }
}

/// Drawables painted together once the redraw timer fires
pub struct Scene<D: Drawable> {
    items: Vec<D>,
    timer: RedrawTimer,
}

impl<D: Drawable> Default for Scene<D> {
    fn default() -> Self {
        Self::new(DEFAULT_REDRAW_DELAY)
    }
}

impl<D: Drawable> Scene<D> {
    pub fn new(delay: Duration) -> Self {
        Self {
            items: Vec::new(),
            timer: RedrawTimer::new(delay),
        }
    }

    /// Add a drawable and restart the redraw timer
    pub fn add(&mut self, item: D) {
        self.add_at(item, time::current_time_secs());
    }

    pub fn add_at(&mut self, item: D, now: f64) {
        self.items.push(item);
        self.timer.restart(now);
    }

    pub fn items(&self) -> &[D] {
        &self.items
    }

    pub fn timer(&self) -> &RedrawTimer {
        &self.timer
    }

    pub fn draw_all(&self, painter: &Painter) {
        for item in &self.items {
            item.draw(painter);
        }
    }

    /// Draw everything if the timer has fired. Returns whether it did.
    pub fn poll(&mut self, painter: &Painter, now: f64) -> bool {
        if self.timer.take_due(now) {
            self.draw_all(painter);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting<'a>(&'a Cell<usize>);

    impl Drawable for Counting<'_> {
        fn draw(&self, _painter: &Painter) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn test_painter() -> Painter {
        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(100.0, 100.0));
        Painter::new(ctx, egui::LayerId::background(), rect)
    }

    #[test]
    fn timer_fires_once_after_delay() {
        let mut timer = RedrawTimer::new(Duration::from_secs(5));
        assert!(!timer.is_due(100.0));

        timer.restart(10.0);
        assert!(!timer.take_due(14.9));
        assert_eq!(timer.remaining(12.0), Some(Duration::from_secs(3)));
        assert!(timer.take_due(15.0));
        assert!(!timer.take_due(16.0));
        assert!(!timer.is_pending());
    }

    #[test]
    fn restart_pushes_deadline_out() {
        let mut timer = RedrawTimer::default();
        timer.restart(0.0);
        timer.restart(4.0);
        assert!(!timer.is_due(5.0));
        assert!(timer.is_due(9.0));
    }

    #[test]
    fn scene_redraws_everything_when_due() {
        let draws = Cell::new(0);
        let painter = test_painter();
        let mut scene = Scene::default();

        scene.add_at(Counting(&draws), 0.0);
        scene.add_at(Counting(&draws), 3.0);
        assert!(!scene.poll(&painter, 5.0));
        assert_eq!(draws.get(), 0);

        assert!(scene.poll(&painter, 8.0));
        assert_eq!(draws.get(), 2);
        assert!(!scene.poll(&painter, 20.0));
    }
}
