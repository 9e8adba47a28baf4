use crate::{TouchPoint, TouchState, MAX_POINTS};

/// Jitter-filtered view of the touch surface.
///
/// Each slot holds the last point that moved far enough to count as real motion.
/// Sub-margin moves are dropped rather than accumulated: the reference only moves
/// when a single reading lands outside the margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tracker {
  slots: [Option<TouchPoint>; MAX_POINTS],
  count: u8,
  released: u8,
}

impl Tracker {
  pub(crate) const fn new() -> Self {
    Self { slots: [None; MAX_POINTS], count: 0, released: 0 }
  }

  /// Fold a fresh snapshot in. Returns `true` if a point moved past `margin` or the
  /// number of points changed.
  pub(crate) fn update(&mut self, state: &TouchState, margin: u16) -> bool {
    let count = state.count();
    self.released = self.count.saturating_sub(count);

    let mut changed = self.count != count;
    for (slot, point) in self.slots.iter_mut().zip(state.points()) {
      let moved = match slot {
        Some(last) => point.exceeds(last, margin),
        None => true,
      };
      if moved {
        *slot = Some(*point);
        changed = true;
      }
    }

    // Lifted fingers lose their reference.
    for slot in &mut self.slots[count as usize..] {
      *slot = None;
    }

    self.count = count;
    changed
  }

  pub(crate) fn count(&self) -> u8 {
    self.count
  }

  /// 1-based lookup of a tracked point.
  pub(crate) fn point(&self, n: u8) -> Option<TouchPoint> {
    if n == 0 || n > self.count {
      return None;
    }
    self.slots[n as usize - 1]
  }

  pub(crate) fn points(&self) -> impl Iterator<Item = TouchPoint> + '_ {
    self.slots[..self.count as usize].iter().flatten().copied()
  }

  /// Points lifted in the last update. Reading clears the value.
  pub(crate) fn take_released(&mut self) -> u8 {
    core::mem::take(&mut self.released)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{RegisterBlock, REG_BLOCK_LEN};

  fn snapshot(points: &[(u16, u16)]) -> TouchState {
    let mut raw = [0u8; REG_BLOCK_LEN];
    raw[0x02] = points.len() as u8;
    for (i, &(x, y)) in points.iter().enumerate() {
      let base = 0x03 + 6 * i;
      raw[base] = (x >> 8) as u8;
      raw[base + 1] = x as u8;
      raw[base + 2] = (y >> 8) as u8;
      raw[base + 3] = y as u8;
    }
    TouchState::decode(&RegisterBlock::new(raw), 5)
  }

  fn xy(tracker: &Tracker, n: u8) -> Option<(u16, u16)> {
    tracker.point(n).map(|p| (p.x, p.y))
  }

  #[test]
  fn first_touch_is_a_change() {
    let mut tracker = Tracker::new();
    assert!(tracker.update(&snapshot(&[(100, 100)]), 5));
    assert_eq!(xy(&tracker, 1), Some((100, 100)));
  }

  #[test]
  fn movement_within_margin_is_noise() {
    let mut tracker = Tracker::new();
    tracker.update(&snapshot(&[(100, 100)]), 5);

    assert!(!tracker.update(&snapshot(&[(102, 103)]), 5));
    assert_eq!(xy(&tracker, 1), Some((100, 100)));
  }

  #[test]
  fn movement_past_margin_is_copied() {
    let mut tracker = Tracker::new();
    tracker.update(&snapshot(&[(100, 100)]), 5);

    assert!(tracker.update(&snapshot(&[(108, 100)]), 5));
    assert_eq!(xy(&tracker, 1), Some((108, 100)));
  }

  #[test]
  fn sub_margin_steps_do_not_accumulate() {
    let mut tracker = Tracker::new();
    tracker.update(&snapshot(&[(100, 100)]), 5);

    for x in [103, 105, 104] {
      assert!(!tracker.update(&snapshot(&[(x, 100)]), 5));
    }
    assert_eq!(xy(&tracker, 1), Some((100, 100)));
  }

  #[test]
  fn jitter_is_judged_per_point() {
    let mut tracker = Tracker::new();
    tracker.update(&snapshot(&[(100, 100), (500, 500)]), 5);

    assert!(tracker.update(&snapshot(&[(101, 101), (520, 500)]), 5));
    assert_eq!(xy(&tracker, 1), Some((100, 100)));
    assert_eq!(xy(&tracker, 2), Some((520, 500)));
  }

  #[test]
  fn lifting_a_finger_is_a_change_and_a_release() {
    let mut tracker = Tracker::new();
    tracker.update(&snapshot(&[(100, 100), (500, 500)]), 5);

    assert!(tracker.update(&snapshot(&[(100, 100)]), 5));
    assert_eq!(tracker.take_released(), 1);
    assert_eq!(tracker.take_released(), 0);
    assert_eq!(tracker.point(2), None);
  }

  #[test]
  fn release_is_overwritten_by_the_next_update() {
    let mut tracker = Tracker::new();
    tracker.update(&snapshot(&[(1, 1), (50, 50), (90, 90)]), 5);
    tracker.update(&snapshot(&[]), 5);
    tracker.update(&snapshot(&[(10, 10)]), 5);
    assert_eq!(tracker.take_released(), 0);
  }

  #[test]
  fn returning_finger_takes_a_fresh_reference() {
    let mut tracker = Tracker::new();
    tracker.update(&snapshot(&[(100, 100), (500, 500)]), 5);
    tracker.update(&snapshot(&[(100, 100)]), 5);

    assert!(tracker.update(&snapshot(&[(100, 100), (502, 501)]), 5));
    assert_eq!(xy(&tracker, 2), Some((502, 501)));
  }

  #[test]
  fn out_of_range_lookups() {
    let mut tracker = Tracker::new();
    tracker.update(&snapshot(&[(1, 2), (3, 4)]), 5);
    assert_eq!(tracker.point(0), None);
    assert_eq!(tracker.point(3), None);
    assert_eq!(tracker.points().count(), 2);
  }
}
