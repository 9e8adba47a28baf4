use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal_async::digital::Wait;

/// Touch notification shared between the INT line handler and the driver.
///
/// The handler side calls [`TouchSignal::on_falling_edge`] (from an interrupt
/// service routine) or awaits [`TouchSignal::wait_for_touch`] (from an async task).
/// An edge marks the signal pending and masks further edges; the driver clears it
/// and re-arms only after it has read the touch registers successfully.
///
/// Only atomic loads and stores are used, so the type also works on cores without
/// compare-and-swap.
///
/// ```no_run
/// use ft5x06::TouchSignal;
///
/// static TOUCH: TouchSignal = TouchSignal::new();
///
/// // In the GPIO interrupt handler for the INT pin:
/// fn on_int_falling_edge() {
///   TOUCH.on_falling_edge();
/// }
/// ```
#[derive(Debug)]
pub struct TouchSignal {
  pending: AtomicBool,
  armed: AtomicBool,
}

impl TouchSignal {
  pub const fn new() -> Self {
    Self { pending: AtomicBool::new(false), armed: AtomicBool::new(false) }
  }

  /// Record a falling edge on the INT line. Ignored while masked.
  pub fn on_falling_edge(&self) {
    if self.armed.load(Ordering::Acquire) {
      self.armed.store(false, Ordering::Release);
      self.pending.store(true, Ordering::Release);
    }
  }

  /// Wait for the next falling edge on `pin` and record it.
  pub async fn wait_for_touch<P: Wait>(&self, pin: &mut P) -> Result<(), P::Error> {
    pin.wait_for_falling_edge().await?;
    self.on_falling_edge();
    Ok(())
  }

  pub fn is_pending(&self) -> bool {
    self.pending.load(Ordering::Acquire)
  }

  pub fn is_armed(&self) -> bool {
    self.armed.load(Ordering::Acquire)
  }

  /// Clear a pending touch and unmask edge detection.
  pub(crate) fn rearm(&self) {
    self.pending.store(false, Ordering::Release);
    self.armed.store(true, Ordering::Release);
  }
}

impl Default for TouchSignal {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use core::convert::Infallible;
  use embassy_futures::block_on;
  use embedded_hal::digital::ErrorType;

  struct EdgePin;

  impl ErrorType for EdgePin {
    type Error = Infallible;
  }

  impl Wait for EdgePin {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }
    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }
    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }
    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }
    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }
  }

  #[test]
  fn starts_masked() {
    let signal = TouchSignal::new();
    signal.on_falling_edge();
    assert!(!signal.is_pending());
    assert!(!signal.is_armed());
  }

  #[test]
  fn edge_sets_pending_and_masks() {
    let signal = TouchSignal::new();
    signal.rearm();

    signal.on_falling_edge();
    assert!(signal.is_pending());
    assert!(!signal.is_armed());

    // A second edge while masked changes nothing.
    signal.on_falling_edge();
    assert!(signal.is_pending());
  }

  #[test]
  fn rearm_clears_pending() {
    let signal = TouchSignal::new();
    signal.rearm();
    signal.on_falling_edge();

    signal.rearm();
    assert!(!signal.is_pending());
    assert!(signal.is_armed());
  }

  #[test]
  fn waiting_on_a_pin_records_the_edge() {
    let signal = TouchSignal::new();
    signal.rearm();

    let mut pin = EdgePin;
    assert!(block_on(signal.wait_for_touch(&mut pin)).is_ok());
    assert!(signal.is_pending());
  }
}
