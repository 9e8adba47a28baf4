use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Ft5x06, InterruptMode, Reg, INFO_BLOCK_LEN};

impl<I, E> Ft5x06<'_, I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read the identification registers (`0xA1..=0xA8`).
  pub async fn firmware_info(&mut self) -> Result<FirmwareInfo, Error<E>> {
    let mut buf = [0u8; INFO_BLOCK_LEN];
    self.read_bytes(Reg::LibVersionH, &mut buf).await?;

    let info = FirmwareInfo::from(buf);
    #[cfg(feature = "defmt")]
    defmt::info!("FT5x06: {:?}", info);
    Ok(info)
  }
}

/// Firmware and vendor details reported by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareInfo {
  pub lib_version: u16,
  pub chip_vendor_id: u8,
  pub interrupt_mode: InterruptMode,
  pub firmware_id: u8,
  pub state: RunState,
  pub panel_vendor_id: u8,
}

impl From<[u8; INFO_BLOCK_LEN]> for FirmwareInfo {
  fn from(b: [u8; INFO_BLOCK_LEN]) -> Self {
    // Offsets relative to LibVersionH; b[4] is the power mode register.
    Self {
      lib_version: u16::from_be_bytes([b[0], b[1]]),
      chip_vendor_id: b[2],
      interrupt_mode: InterruptMode::from_bits(b[3]),
      firmware_id: b[5],
      state: RunState::from(b[6]),
      panel_vendor_id: b[7],
    }
  }
}

/// Controller running state (`ID_G_STATE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
  Configure,
  Work,
  Calibration,
  Factory,
  AutoCalibration,
  Unknown(u8),
}

impl From<u8> for RunState {
  fn from(bits: u8) -> Self {
    match bits {
      0x00 => Self::Configure,
      0x01 => Self::Work,
      0x02 => Self::Calibration,
      0x03 => Self::Factory,
      0x04 => Self::AutoCalibration,
      other => Self::Unknown(other),
    }
  }
}
