use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Ft5x06, Reg, I2C_ADDR};

impl<I, E> Ft5x06<'_, I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Burst read starting at `reg`. The register pointer auto-increments, so a single
  /// transaction returns `buf.len()` consecutive registers.
  pub(crate) async fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    let addr = [reg.into()];
    self.i2c.write_read(I2C_ADDR, &addr, buf).await.map_err(Error::I2c)
  }

  pub(crate) async fn write_u8(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    let buf = [reg.into(), value];
    self.i2c.write(I2C_ADDR, &buf).await.map_err(Error::I2c)
  }
}
