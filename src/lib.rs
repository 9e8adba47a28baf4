#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async, `no_std` driver for the FocalTech FT5x06 capacitive multi-touch
//! controller.
//!
//! The FT5x06 reports up to five simultaneous touch points plus a coarse zoom
//! gesture. This crate reads the touch registers in a single burst, decodes them
//! into typed points, and keeps a jitter-filtered view of the surface so a UI loop
//! only wakes up for real movement, new contacts, or lifted fingers:
//!
//! - Burst decoding of all five touch records with glitch rejection
//! - Per-point jitter filtering with a configurable margin
//! - Release counting for lifted fingers
//! - Polling mode, or interrupt mode driven by a [`TouchSignal`] fed from the INT
//!   line
//! - Using `embedded-hal` / `embedded-hal-async` 1.0 traits so the driver works
//!   across MCU families
//!
//! ```no_run
//! use embedded_hal_async::i2c::{I2c, SevenBitAddress};
//! use ft5x06::{Config, Ft5x06};
//!
//! async fn example<I2C, E>(i2c: I2C) -> Result<(), ft5x06::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//! {
//!   let mut touch = Ft5x06::new(i2c, Config::default());
//!   touch.initialize().await?;
//!
//!   loop {
//!     if touch.point_detected().await? {
//!       for n in 1..=touch.point_count() {
//!         let _ = (touch.point_x(n), touch.point_y(n));
//!       }
//!     }
//!   }
//! }
//! ```
mod config;
mod event;
mod info;
mod reg;
mod rw;
mod signal;
mod touch;
mod tracker;

use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_async::i2c::I2c;

pub use config::*;
pub use event::*;
pub use info::*;
use reg::*;
pub use reg::{COORD_LIMIT, MAX_POINTS, REG_BLOCK_LEN};
pub use signal::*;
use tracker::Tracker;

/// Errors that can occur while interacting with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
}

/// Driver for the FocalTech FT5x06 touch controller.
///
/// The driver owns the I²C peripheral and, in interrupt mode, borrows the
/// [`TouchSignal`] written by the INT line handler. Create an instance with
/// [`Ft5x06::new`] (polling) or [`Ft5x06::with_signal`] (interrupt driven), call
/// [`Ft5x06::initialize`] once, then call [`Ft5x06::point_detected`] from the UI
/// loop.
pub struct Ft5x06<'a, I> {
  i2c: I,
  signal: Option<&'a TouchSignal>,
  config: Config,
  block: RegisterBlock,
  state: TouchState,
  tracker: Tracker,
}

impl<'a, I, E> Ft5x06<'a, I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Create a driver that reads the controller on every poll.
  pub fn new(i2c: I, config: Config) -> Self {
    Self {
      i2c,
      signal: None,
      config,
      block: RegisterBlock::empty(),
      state: TouchState::default(),
      tracker: Tracker::new(),
    }
  }

  /// Create a driver that only reads the controller after `signal` saw a falling
  /// edge on the INT line.
  pub fn with_signal(i2c: I, config: Config, signal: &'a TouchSignal) -> Self {
    Self { signal: Some(signal), ..Self::new(i2c, config) }
  }

  /// Put the controller into its normal operating mode and reset the tracked
  /// state.
  ///
  /// The INT line is configured for trigger mode when a [`TouchSignal`] is
  /// attached, polling mode otherwise. In interrupt mode the signal is armed last,
  /// so edges seen before initialization are discarded.
  pub async fn initialize(&mut self) -> Result<(), Error<E>> {
    self.write_u8(Reg::DeviceMode, DEVICE_MODE_NORMAL).await?;
    let mode = if self.signal.is_some() { InterruptMode::Trigger } else { InterruptMode::Polling };
    self.write_u8(Reg::InterruptMode, mode.into_bits()).await?;

    self.block = RegisterBlock::empty();
    self.state = TouchState::default();
    self.tracker = Tracker::new();

    if let Some(signal) = self.signal {
      signal.rearm();
    }

    #[cfg(feature = "defmt")]
    defmt::info!("FT5x06: initialized, {:?}, {:?}", mode, self.config);
    Ok(())
  }

  /// `true` when polls are gated by a [`TouchSignal`].
  pub fn interrupt_enabled(&self) -> bool {
    self.signal.is_some()
  }

  pub fn config(&self) -> Config {
    self.config
  }

  /// Consume the driver and hand back the I²C peripheral.
  pub fn release(self) -> I {
    self.i2c
  }
}
