use crate::reg::*;

/// Coarse gesture classification reported alongside the raw points.
///
/// The controller also defines four swipe codes, but this generation does not
/// report them reliably, so they decode to [`Gesture::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
  #[default]
  None,
  ZoomIn,
  ZoomOut,
}

impl Gesture {
  pub const fn is_zoom(&self) -> bool {
    matches!(self, Gesture::ZoomIn | Gesture::ZoomOut)
  }
}

impl From<u8> for Gesture {
  fn from(id: u8) -> Self {
    match id {
      GEST_ID_ZOOM_IN => Self::ZoomIn,
      GEST_ID_ZOOM_OUT => Self::ZoomOut,
      GEST_ID_MOVE_UP | GEST_ID_MOVE_LEFT | GEST_ID_MOVE_DOWN | GEST_ID_MOVE_RIGHT => Self::None,
      GEST_ID_NO_GESTURE => Self::None,
      _ => Self::None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zoom_codes_decode() {
    assert_eq!(Gesture::from(0x48), Gesture::ZoomIn);
    assert_eq!(Gesture::from(0x49), Gesture::ZoomOut);
    assert!(Gesture::from(0x49).is_zoom());
  }

  #[test]
  fn swipes_and_unknown_codes_are_no_gesture() {
    for id in [0x00, 0x10, 0x14, 0x18, 0x1C, 0x47, 0xFF] {
      assert_eq!(Gesture::from(id), Gesture::None, "id {:#04x}", id);
    }
  }
}
