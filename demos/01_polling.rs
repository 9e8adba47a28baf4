//! Polling loop example: read the controller on every tick.
#![allow(unused)]
use embedded_hal_async::i2c::{I2c, SevenBitAddress};
use ft5x06::{Config, Ft5x06, Gesture};

#[allow(dead_code)]
async fn main_async<I2C, E>(i2c: I2C) -> Result<(), ft5x06::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
{
  let mut touch = Ft5x06::new(i2c, Config::default().with_jitter_margin(3));
  touch.initialize().await?;
  let _info = touch.firmware_info().await?;

  loop {
    if !touch.point_detected().await? {
      continue;
    }

    for point in touch.points() {
      let _ = (point.id, point.x, point.y);
      // handle contact
    }

    if touch.release_count() > 0 {
      // handle lifted fingers
    }

    match touch.gesture() {
      Gesture::ZoomIn | Gesture::ZoomOut => {
        // handle zoom
      }
      Gesture::None => {}
    }
  }
}

fn main() {}
