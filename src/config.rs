use crate::MAX_POINTS;

/// Runtime configuration for the touch state tracker.
///
/// Both values can also be changed after construction through
/// [`crate::Ft5x06::jitter_margin`] and [`crate::Ft5x06::max_point_count`].
///
/// # Example
/// ```no_run
/// use ft5x06::Config;
///
/// let config = Config::default().with_jitter_margin(8).with_max_points(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  /// Largest per-axis coordinate delta treated as sensor noise.
  pub jitter_margin: u16,
  /// Upper bound on the number of reported points, `0..=5`.
  pub max_points: u8,
}

impl Config {
  pub const DEFAULT_JITTER_MARGIN: u16 = 5;

  pub const fn new(jitter_margin: u16, max_points: u8) -> Self {
    Self { jitter_margin, max_points: clamp_points(max_points) }
  }

  pub const fn with_jitter_margin(mut self, jitter_margin: u16) -> Self {
    self.jitter_margin = jitter_margin;
    self
  }

  /// Values above five are clamped to five.
  pub const fn with_max_points(mut self, max_points: u8) -> Self {
    self.max_points = clamp_points(max_points);
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(Self::DEFAULT_JITTER_MARGIN, MAX_POINTS as u8)
  }
}

const fn clamp_points(n: u8) -> u8 {
  if n as usize > MAX_POINTS {
    MAX_POINTS as u8
  } else {
    n
  }
}

/// How the controller signals new touch data on its INT line (`G_MODE` register).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
  /// INT is held low while a touch is present.
  Polling = 0x00,
  /// INT pulses low once per new report.
  Trigger = 0x01,
}

impl InterruptMode {
  pub(crate) const fn into_bits(self) -> u8 {
    self as _
  }

  pub(crate) const fn from_bits(bits: u8) -> Self {
    match bits & 0x01 {
      0x00 => Self::Polling,
      _ => Self::Trigger,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_the_reference_driver() {
    let config = Config::default();
    assert_eq!(config.jitter_margin, 5);
    assert_eq!(config.max_points, 5);
  }

  #[test]
  fn max_points_is_clamped() {
    assert_eq!(Config::default().with_max_points(9).max_points, 5);
    assert_eq!(Config::default().with_max_points(0).max_points, 0);
    assert_eq!(Config::new(3, 200).max_points, 5);
  }

  #[test]
  fn interrupt_mode_bits() {
    assert_eq!(InterruptMode::from_bits(InterruptMode::Trigger.into_bits()), InterruptMode::Trigger);
    assert_eq!(InterruptMode::from_bits(0x00), InterruptMode::Polling);
  }
}
