use crate::COORD_LIMIT;

/// Per-point event flag, bits 7:6 of the XH register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventFlag {
  #[default]
  PutDown = 0b00,
  PutUp = 0b01,
  Contact = 0b10,
  Reserved = 0b11,
}

impl EventFlag {
  pub(crate) const fn from_bits(bits: u8) -> Self {
    match bits & 0b11 {
      0b00 => Self::PutDown,
      0b01 => Self::PutUp,
      0b10 => Self::Contact,
      _ => Self::Reserved,
    }
  }
}

/// A single finger contact.
///
/// `x` and `y` are 12-bit values; the controller reports `0..=1999` for a real
/// contact.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
  pub x: u16,
  pub y: u16,
  pub event: EventFlag,
  /// Controller-assigned touch ID, bits 7:4 of the YH register.
  pub id: u8,
}

impl TouchPoint {
  pub const fn new(x: u16, y: u16) -> Self {
    Self { x, y, event: EventFlag::PutDown, id: 0 }
  }

  /// Decode one XH/XL/YH/YL record.
  pub(crate) const fn from_record(r: &[u8; 4]) -> Self {
    Self {
      x: (((r[0] & 0x0F) as u16) << 8) | r[1] as u16,
      y: (((r[2] & 0x0F) as u16) << 8) | r[3] as u16,
      event: EventFlag::from_bits(r[0] >> 6),
      id: r[2] >> 4,
    }
  }

  /// `false` for coordinates produced by a bus glitch.
  pub const fn is_valid(&self) -> bool {
    self.x < COORD_LIMIT && self.y < COORD_LIMIT
  }

  /// `true` if either axis moved further than `margin` relative to `other`.
  pub const fn exceeds(&self, other: &TouchPoint, margin: u16) -> bool {
    self.x.abs_diff(other.x) > margin || self.y.abs_diff(other.y) > margin
  }
}

impl core::fmt::Debug for TouchPoint {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "#{} ({}, {}) {:?}", self.id, self.x, self.y, self.event)
  }
}
