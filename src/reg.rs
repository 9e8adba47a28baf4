/******************************************************************************
 * Refer to the FocalTech FT5x06 application note for more information.      *
 * ========================================================================== *
 *                        FT5x06 - Registers & Memory Map                     *
*******************************************************************************/

pub(crate) const I2C_ADDR: u8 = 0x38;

/// Number of registers fetched per poll; enough to cover all five touch points.
pub const REG_BLOCK_LEN: usize = 31;

/// Maximum number of simultaneous touch points the controller reports.
pub const MAX_POINTS: usize = 5;

/// First out-of-range coordinate value. Anything at or above it is a read glitch.
pub const COORD_LIMIT: u16 = 2000;

/// Distance between two consecutive touch point records in the register block.
pub(crate) const POINT_STRIDE: usize = 6;

#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  // Operating mode and touch data (0x00..0x1E)
  DeviceMode = 0x00,
  GestureId = 0x01,
  TdStatus = 0x02,
  Touch1Xh = 0x03,
  Touch1Xl = 0x04,
  Touch1Yh = 0x05,
  Touch1Yl = 0x06,
  Touch2Xh = 0x09,
  Touch3Xh = 0x0F,
  Touch4Xh = 0x15,
  Touch5Xh = 0x1B,
  Touch5Yl = 0x1E,

  // Thresholds & timing (0x80..0xA0)
  ThGroup = 0x80,
  ThPeak = 0x81,
  ThCal = 0x82,
  ThWater = 0x83,
  ThTemp = 0x84,
  Ctrl = 0x86,
  TimeEnterMonitor = 0x87,
  PeriodActive = 0x88,
  PeriodMonitor = 0x89,
  AutoCalibrationMode = 0xA0,

  // Identification & status (0xA1..0xAE)
  LibVersionH = 0xA1,
  LibVersionL = 0xA2,
  Cipher = 0xA3,
  InterruptMode = 0xA4,
  PowerMode = 0xA5,
  FirmwareId = 0xA6,
  State = 0xA7,
  PanelVendorId = 0xA8,
  ErrorCode = 0xA9,
  Calibration = 0xAA,
  BigAreaThreshold = 0xAE,

  // Log buffer
  LogMsgCount = 0xFE,
  LogCurrentChar = 0xFF,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

impl Reg {
  /// Offset of this register inside the block returned by a burst read from `0x00`.
  #[inline]
  pub(crate) const fn offset(self) -> usize {
    self as usize
  }
}

// Gesture identifiers reported in `GestureId`
pub(crate) const GEST_ID_NO_GESTURE: u8 = 0x00;
pub(crate) const GEST_ID_MOVE_UP: u8 = 0x10;
pub(crate) const GEST_ID_MOVE_LEFT: u8 = 0x14;
pub(crate) const GEST_ID_MOVE_DOWN: u8 = 0x18;
pub(crate) const GEST_ID_MOVE_RIGHT: u8 = 0x1C;
pub(crate) const GEST_ID_ZOOM_IN: u8 = 0x48;
pub(crate) const GEST_ID_ZOOM_OUT: u8 = 0x49;

// `DeviceMode` values
pub(crate) const DEVICE_MODE_NORMAL: u8 = 0x00;

/// Number of identification registers read by [`crate::Ft5x06::firmware_info`].
pub(crate) const INFO_BLOCK_LEN: usize = (Reg::PanelVendorId as usize) - (Reg::LibVersionH as usize) + 1;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn point_records_follow_the_stride() {
    assert_eq!(Reg::Touch2Xh.offset() - Reg::Touch1Xh.offset(), POINT_STRIDE);
    assert_eq!(Reg::Touch3Xh.offset() - Reg::Touch2Xh.offset(), POINT_STRIDE);
    assert_eq!(Reg::Touch4Xh.offset() - Reg::Touch3Xh.offset(), POINT_STRIDE);
    assert_eq!(Reg::Touch5Xh.offset() - Reg::Touch4Xh.offset(), POINT_STRIDE);
  }

  #[test]
  fn block_covers_the_last_point() {
    assert_eq!(Reg::Touch5Yl.offset() + 1, REG_BLOCK_LEN);
    assert_eq!(INFO_BLOCK_LEN, 8);
  }

  #[test]
  fn swipe_codes_are_distinct_from_zoom() {
    let swipes = [GEST_ID_MOVE_UP, GEST_ID_MOVE_LEFT, GEST_ID_MOVE_DOWN, GEST_ID_MOVE_RIGHT];
    assert!(!swipes.contains(&GEST_ID_ZOOM_IN));
    assert!(!swipes.contains(&GEST_ID_ZOOM_OUT));
    assert!(!swipes.contains(&GEST_ID_NO_GESTURE));
  }
}
