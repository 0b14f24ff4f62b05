//! Port driver for the TM4C123 GPIO pins.
//!
//! [`PORT`] is the driver instance bound to the on-chip GPIO blocks; the `port_*` functions
//! forward to it. Tests and other boards can build their own [`port::Port`] over any
//! [`port::PortRegisters`] implementation.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod det;
pub mod port;
pub mod sdk;

use det::LogDet;
#[cfg(feature = "version-info-api")]
use port::VersionInfo;
#[cfg(feature = "set-pin-direction-api")]
use port::PinDirection;
#[cfg(feature = "set-pin-mode-api")]
use port::PinModeType;
#[cfg(any(feature = "set-pin-direction-api", feature = "set-pin-mode-api"))]
use port::PinId;
use port::{Port, PortConfigType, PortError};
use sdk::mcu::gpio::Tm4cGpio;

pub static PORT: Port<Tm4cGpio, LogDet> = Port::new(Tm4cGpio, LogDet);

pub fn port_init(config: &'static PortConfigType) -> Result<(), PortError> {
    PORT.init(config)
}

#[cfg(feature = "set-pin-direction-api")]
pub fn port_set_pin_direction(pin: PinId, direction: PinDirection) -> Result<(), PortError> {
    PORT.set_pin_direction(pin, direction)
}

#[cfg(feature = "set-pin-mode-api")]
pub fn port_set_pin_mode(pin: PinId, mode: PinModeType) -> Result<(), PortError> {
    PORT.set_pin_mode(pin, mode)
}

pub fn port_refresh_pin_direction() -> Result<(), PortError> {
    PORT.refresh_pin_direction()
}

#[cfg(feature = "version-info-api")]
pub fn port_get_version_info() -> VersionInfo {
    PORT.get_version_info()
}
