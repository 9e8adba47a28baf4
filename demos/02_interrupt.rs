//! Interrupt-driven example: one task watches INT, the UI loop polls cheaply.
#![allow(unused)]
use embedded_hal_async::{
  digital::Wait,
  i2c::{I2c, SevenBitAddress},
};
use ft5x06::{Config, Ft5x06, TouchSignal};

static TOUCH: TouchSignal = TouchSignal::new();

#[allow(dead_code)]
async fn int_task<INT: Wait>(mut int: INT) -> Result<(), INT::Error> {
  loop {
    TOUCH.wait_for_touch(&mut int).await?;
  }
}

#[allow(dead_code)]
async fn ui_task<I2C, E>(i2c: I2C) -> Result<(), ft5x06::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
{
  let mut touch = Ft5x06::with_signal(i2c, Config::default().with_max_points(2), &TOUCH);
  touch.initialize().await?;

  loop {
    // Returns immediately without bus traffic until INT fires.
    if touch.point_detected().await? {
      let _ = (touch.point_x(1), touch.point_y(1));
      // redraw
    }
  }
}

fn main() {}
