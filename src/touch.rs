use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Ft5x06, Gesture, Reg, RegisterBlock, TouchPoint, TouchState, MAX_POINTS, REG_BLOCK_LEN};

impl<I, E> Ft5x06<'_, I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Poll the controller for touch changes.
  ///
  /// In polling mode every call reads the controller. In interrupt mode the bus is
  /// only touched when the [`crate::TouchSignal`] is pending; otherwise this returns
  /// `Ok(false)` right away.
  ///
  /// Returns `true` if the number of points changed or any point moved further than
  /// the jitter margin. Moves within the margin are treated as noise and leave the
  /// reported coordinates untouched.
  ///
  /// A failed read leaves all state, including a pending signal, as it was, so the
  /// next call retries.
  pub async fn point_detected(&mut self) -> Result<bool, Error<E>> {
    if let Some(signal) = self.signal {
      if !signal.is_pending() {
        return Ok(false);
      }
    }

    let state = self.read_state().await?;

    if let Some(signal) = self.signal {
      signal.rearm();
    }

    let changed = self.tracker.update(&state, self.config.jitter_margin);

    #[cfg(feature = "defmt")]
    {
      if changed {
        defmt::debug!("FT5x06: {} point(s), gesture {:?}", state.count(), state.gesture());
      }
    }

    Ok(changed)
  }

  async fn read_state(&mut self) -> Result<TouchState, Error<E>> {
    let mut buf = [0u8; REG_BLOCK_LEN];
    self.read_bytes(Reg::DeviceMode, &mut buf).await?;

    self.block = RegisterBlock::new(buf);
    self.state = TouchState::decode(&self.block, self.config.max_points);
    Ok(self.state)
  }

  /// Number of points seen by the last successful poll, `0..=5`.
  pub fn point_count(&self) -> u8 {
    self.tracker.count()
  }

  /// Filtered point `n`, 1-based. `None` for `n == 0` or `n > point_count()`.
  pub fn point(&self, n: u8) -> Option<TouchPoint> {
    self.tracker.point(n)
  }

  /// X coordinate of point `n` (1-based), or `-1` if there is no such point.
  pub fn point_x(&self, n: u8) -> i16 {
    self.point(n).map_or(-1, |p| p.x as i16)
  }

  /// Y coordinate of point `n` (1-based), or `-1` if there is no such point.
  pub fn point_y(&self, n: u8) -> i16 {
    self.point(n).map_or(-1, |p| p.y as i16)
  }

  /// Iterate over the filtered active points.
  pub fn points(&self) -> impl Iterator<Item = TouchPoint> + '_ {
    self.tracker.points()
  }

  /// Gesture reported by the last successful poll.
  pub fn gesture(&self) -> Gesture {
    self.state.gesture()
  }

  /// Number of fingers lifted at the last poll. Reading clears the count.
  pub fn release_count(&mut self) -> u8 {
    self.tracker.take_released()
  }

  /// Unfiltered snapshot decoded by the last successful poll.
  pub fn touch_state(&self) -> &TouchState {
    &self.state
  }

  /// Raw registers from the last successful poll.
  pub fn register_block(&self) -> &RegisterBlock {
    &self.block
  }

  /// Set the jitter margin with `Some`, or query it with `None`. Returns the margin
  /// in effect.
  pub fn jitter_margin(&mut self, margin: Option<u16>) -> u16 {
    if let Some(margin) = margin {
      self.config.jitter_margin = margin;
    }
    self.config.jitter_margin
  }

  /// Set the maximum reported point count. Values outside `0..=5` only query it.
  /// Returns the limit in effect; it applies from the next poll.
  pub fn max_point_count(&mut self, count: u8) -> u8 {
    if count as usize <= MAX_POINTS {
      self.config.max_points = count;
    }
    self.config.max_points
  }
}
