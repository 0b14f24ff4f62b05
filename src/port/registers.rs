use crate::port::types::{PinDirection, PinLevel, PinMode, PinResistor};

/// Primitive hardware operations on a single `(port, pin)` pair.
///
/// Implementations perform the raw register access only. Callers hold the port's lock
/// around any call that read-modify-writes a shared port register.
pub trait PortRegisters {
    /// Gates the clock of `port` on and waits until the port is ready.
    fn enable_port_clock(&self, port: u8);

    fn set_direction(&self, port: u8, pin: u8, direction: PinDirection);

    /// Reads back the live direction of the pin.
    fn direction(&self, port: u8, pin: u8) -> PinDirection;

    fn set_pull(&self, port: u8, pin: u8, resistor: PinResistor);

    fn set_output_level(&self, port: u8, pin: u8, level: PinLevel);

    /// Selects the multiplexer function. Does not touch the digital enable bit.
    fn set_function(&self, port: u8, pin: u8, mode: PinMode);

    fn set_digital_enable(&self, port: u8, pin: u8, enabled: bool);

    /// Whether the pin's special-function registers are commit-protected and must be
    /// unlocked before they can be reconfigured.
    fn requires_unlock(&self, port: u8, pin: u8) -> bool;

    fn unlock(&self, port: u8, pin: u8);

    fn lock(&self, port: u8);
}
