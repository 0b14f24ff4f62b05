use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::config::{PORT_CONFIGURED_PINS, PORT_COUNT};
use crate::port::PortError;

/// Pin identifier used by every runtime API: the zero-based index into the configuration
/// table, not a port/bit pair.
pub type PinId = u8;

/// Raw mode value as accepted by `set_pin_mode`.
pub type PinModeType = u8;

/// Physical pins present on each port (PE6/PE7 and PF5..PF7 are not bonded out).
pub const PORT_PIN_MASK: [u8; PORT_COUNT] = [0xFF, 0xFF, 0xFF, 0xFF, 0x3F, 0x1F];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinDirection {
    Input,
    Output,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinResistor {
    Off,
    PullUp,
    PullDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// Functional multiplexer selection.
///
/// The discriminants are the raw values accepted by `set_pin_mode`; `Alt1..Alt9` are the
/// port-control field values written to hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
#[repr(u8)]
pub enum PinMode {
    Analog = 0,
    Alt1 = 1,
    Alt2 = 2,
    Alt3 = 3,
    Alt4 = 4,
    Alt5 = 5,
    Alt6 = 6,
    Alt7 = 7,
    Alt8 = 8,
    Alt9 = 9,
    DigitalIo = 10,
}

impl PinMode {
    /// Decodes a raw mode value, `None` if it names no mode.
    pub fn from_raw(mode: PinModeType) -> Option<PinMode> {
        FromPrimitive::from_u8(mode)
    }

    /// Whether the digital input buffer must be enabled for this mode.
    pub const fn is_digital(self) -> bool {
        !matches!(self, PinMode::Analog)
    }

    /// The alternate function number, `None` for analog and digital I/O.
    pub const fn alternate_function(self) -> Option<u8> {
        match self {
            PinMode::Analog | PinMode::DigitalIo => None,
            alt => Some(alt as u8),
        }
    }
}

/// Static configuration of one physical pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    pub port: u8,
    pub pin: u8,
    pub direction: PinDirection,
    /// Only applied when `direction` is `Input`.
    pub resistor: PinResistor,
    /// Only applied when `direction` is `Output`.
    pub initial_level: PinLevel,
    pub initial_mode: PinMode,
    pub direction_changeable: bool,
    pub mode_changeable: bool,
}

impl PinConfig {
    pub const fn new(
        port: u8,
        pin: u8,
        direction: PinDirection,
        resistor: PinResistor,
        initial_level: PinLevel,
        initial_mode: PinMode,
        direction_changeable: bool,
        mode_changeable: bool,
    ) -> PinConfig {
        PinConfig {
            port,
            pin,
            direction,
            resistor,
            initial_level,
            initial_mode,
            direction_changeable,
            mode_changeable,
        }
    }

    /// Whether `(port, pin)` names a pin that physically exists.
    pub fn is_physical(&self) -> bool {
        usize::from(self.port) < PORT_COUNT
            && self.pin < 8
            && PORT_PIN_MASK[usize::from(self.port)] & (1 << self.pin) != 0
    }
}

/// Post-build configuration table. Entry `i` describes pin identifier `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortConfigType {
    pub pins: [PinConfig; PORT_CONFIGURED_PINS],
}

impl PortConfigType {
    pub fn get(&self, pin: PinId) -> Option<&PinConfig> {
        self.pins.get(usize::from(pin))
    }

    /// Looks up the identifier that the table assigns to a physical pin.
    pub fn find(&self, port: u8, pin: u8) -> Option<PinId> {
        self.pins
            .iter()
            .position(|cfg| cfg.port == port && cfg.pin == pin)
            .and_then(|index| PinId::try_from(index).ok())
    }

    /// Checks that every entry names an existing physical pin and that no pin is
    /// configured twice.
    pub fn validate(&self) -> Result<(), PortError> {
        let mut seen = [0u8; PORT_COUNT];
        for cfg in self.pins.iter() {
            if !cfg.is_physical() {
                return Err(PortError::InvalidConfig);
            }
            let port = usize::from(cfg.port);
            if seen[port] & (1 << cfg.pin) != 0 {
                return Err(PortError::InvalidConfig);
            }
            seen[port] |= 1 << cfg.pin;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PORT_CONFIGURATION;

    #[test]
    fn test_mode_from_raw_accepts_known_values_only() {
        assert_eq!(PinMode::from_raw(0), Some(PinMode::Analog));
        assert_eq!(PinMode::from_raw(4), Some(PinMode::Alt4));
        assert_eq!(PinMode::from_raw(10), Some(PinMode::DigitalIo));
        assert_eq!(PinMode::from_raw(11), None);
        assert_eq!(PinMode::from_raw(0xFF), None);
    }

    #[test]
    fn test_only_analog_disables_digital_buffer() {
        assert!(!PinMode::Analog.is_digital());
        assert!(PinMode::Alt9.is_digital());
        assert!(PinMode::DigitalIo.is_digital());
        assert_eq!(PinMode::Alt3.alternate_function(), Some(3));
        assert_eq!(PinMode::DigitalIo.alternate_function(), None);
    }

    #[test]
    fn test_reference_table_is_valid() {
        assert_eq!(PORT_CONFIGURATION.validate(), Ok(()));
    }

    #[test]
    fn test_find_maps_physical_pin_to_index() {
        assert_eq!(PORT_CONFIGURATION.find(0, 0), Some(0));
        assert_eq!(PORT_CONFIGURATION.find(5, 1), Some(39));
        assert_eq!(PORT_CONFIGURATION.find(5, 4), Some(42));
        assert_eq!(PORT_CONFIGURATION.find(5, 7), None);
    }

    #[test]
    fn test_validate_rejects_missing_pin() {
        let mut table = PORT_CONFIGURATION;
        // PE6 is not bonded out
        table.pins[37].pin = 6;
        assert_eq!(table.validate(), Err(PortError::InvalidConfig));

        let mut table = PORT_CONFIGURATION;
        table.pins[3].port = 6;
        assert_eq!(table.validate(), Err(PortError::InvalidConfig));
    }

    #[test]
    fn test_validate_rejects_duplicate_pin() {
        let mut table = PORT_CONFIGURATION;
        table.pins[1] = table.pins[0];
        assert_eq!(table.validate(), Err(PortError::InvalidConfig));
    }
}
