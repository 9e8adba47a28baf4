use crate::reg::*;

mod gesture;
mod touchpoint;

pub use gesture::*;
pub use touchpoint::*;

/// Raw copy of registers `0x00..0x1F` as returned by one burst read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterBlock([u8; REG_BLOCK_LEN]);

impl RegisterBlock {
  pub const fn new(bytes: [u8; REG_BLOCK_LEN]) -> Self {
    Self(bytes)
  }

  pub const fn empty() -> Self {
    Self([0; REG_BLOCK_LEN])
  }

  pub fn as_bytes(&self) -> &[u8; REG_BLOCK_LEN] {
    &self.0
  }

  fn at(&self, reg: Reg) -> u8 {
    self.0[reg.offset()]
  }

  fn record(&self, index: usize) -> [u8; 4] {
    let base = Reg::Touch1Xh.offset() + POINT_STRIDE * index;
    [self.0[base], self.0[base + 1], self.0[base + 2], self.0[base + 3]]
  }
}

impl Default for RegisterBlock {
  fn default() -> Self {
    Self::empty()
  }
}

impl From<[u8; REG_BLOCK_LEN]> for RegisterBlock {
  fn from(bytes: [u8; REG_BLOCK_LEN]) -> Self {
    Self(bytes)
  }
}

/// One decoded snapshot of the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchState {
  count: u8,
  points: [TouchPoint; MAX_POINTS],
  gesture: Gesture,
}

impl TouchState {
  /// Decode a register block.
  ///
  /// The point count comes from `TD_STATUS`. Decoding stops at the first point with
  /// an out-of-range coordinate, and the result never holds more than `max_points`
  /// points.
  pub fn decode(block: &RegisterBlock, max_points: u8) -> Self {
    let reported = (block.at(Reg::TdStatus) & 0x07).min(MAX_POINTS as u8);
    let mut state = Self { count: reported, gesture: Gesture::from(block.at(Reg::GestureId)), ..Self::default() };

    for i in 0..reported as usize {
      let point = TouchPoint::from_record(&block.record(i));
      if !point.is_valid() {
        #[cfg(feature = "defmt")]
        defmt::warn!("FT5x06: point {} out of range {:?}, truncating", i, point);
        state.count = i as u8;
        break;
      }
      state.points[i] = point;
    }

    state.count = state.count.min(max_points);
    state
  }

  /// Number of valid points, `0..=5`.
  pub fn count(&self) -> u8 {
    self.count
  }

  /// The valid points, in controller order.
  pub fn points(&self) -> &[TouchPoint] {
    &self.points[..self.count as usize]
  }

  pub fn gesture(&self) -> Gesture {
    self.gesture
  }

  pub fn is_empty(&self) -> bool {
    self.count == 0
  }
}
