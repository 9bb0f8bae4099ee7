use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::regs::I2C_ADDR;

/// Single-register access to the touch controller.
///
/// FocalTech parts expose the gesture window as plain 8-bit registers, so the
/// core only ever needs one-byte reads and writes. Transport failures are
/// reported through [`RegisterPort::Error`]; the gesture core treats them as
/// an unconfirmed attempt and retries where the protocol allows it.
#[allow(async_fn_in_trait)]
pub trait RegisterPort {
  type Error: core::fmt::Debug;

  async fn read(&mut self, addr: u8) -> Result<u8, Self::Error>;

  async fn write(&mut self, addr: u8, value: u8) -> Result<(), Self::Error>;
}

/// [`RegisterPort`] over an `embedded-hal-async` I²C bus.
///
/// A read is a combined write/read transaction (`[addr]` then one byte), a
/// write is a single `[addr, value]` transfer.
pub struct I2cRegisters<I> {
  i2c: I,
  addr: u8,
}

impl<I> I2cRegisters<I> {
  /// Wrap a bus using the default FocalTech address.
  pub fn new(i2c: I) -> Self {
    Self { i2c, addr: I2C_ADDR }
  }

  /// Wrap a bus for a controller strapped to a different address.
  pub fn with_address(i2c: I, addr: u8) -> Self {
    Self { i2c, addr }
  }

  /// Release the underlying bus.
  pub fn into_inner(self) -> I {
    self.i2c
  }
}

impl<I: I2c<SevenBitAddress>> RegisterPort for I2cRegisters<I> {
  type Error = I::Error;

  async fn read(&mut self, addr: u8) -> Result<u8, Self::Error> {
    let mut buf = [0u8; 1];
    self.i2c.write_read(self.addr, &[addr], &mut buf).await?;
    Ok(buf[0])
  }

  async fn write(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
    self.i2c.write(self.addr, &[addr, value]).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use embassy_futures::block_on;
  use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

  #[test]
  fn i2c_write_is_single_transfer() {
    let expectations = [I2cTransaction::write(I2C_ADDR, std::vec![0xD0, 0x01])];
    let mut i2c = I2cMock::new(&expectations);
    let mut port = I2cRegisters::new(i2c.clone());

    block_on(port.write(0xD0, 0x01)).unwrap();
    i2c.done();
  }

  #[test]
  fn i2c_read_uses_write_read() {
    let expectations = [I2cTransaction::write_read(0x2A, std::vec![0xD0], std::vec![0x01])];
    let mut i2c = I2cMock::new(&expectations);
    let mut port = I2cRegisters::with_address(i2c.clone(), 0x2A);

    assert_eq!(block_on(port.read(0xD0)).unwrap(), 0x01);
    i2c.done();
  }
}
