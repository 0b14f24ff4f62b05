use crate::port::types::PinDirection::{Input, Output};
use crate::port::types::PinLevel::Low;
use crate::port::types::PinMode::DigitalIo;
use crate::port::types::PinResistor::{Off, PullUp};
use crate::port::types::{PinConfig, PortConfigType};

// Module identity
pub const PORT_VENDOR_ID: u16 = 1234;
pub const PORT_MODULE_ID: u16 = 124;
pub const PORT_INSTANCE_ID: u8 = 0;

pub const PORT_SW_MAJOR_VERSION: u8 = 1;
pub const PORT_SW_MINOR_VERSION: u8 = 0;
pub const PORT_SW_PATCH_VERSION: u8 = 0;

// Pre-compile switch, selected through the `dev-error-detect` feature. The optional APIs
// are gated directly on their features.
pub const PORT_DEV_ERROR_DETECT: bool = cfg!(feature = "dev-error-detect");

/// GPIO ports A..F
pub const PORT_COUNT: usize = 6;

pub const PORT_A: u8 = 0;
pub const PORT_B: u8 = 1;
pub const PORT_C: u8 = 2;
pub const PORT_D: u8 = 3;
pub const PORT_E: u8 = 4;
pub const PORT_F: u8 = 5;

/// Number of entries in every configuration table.
pub const PORT_CONFIGURED_PINS: usize = 43;

const fn dio_in(port: u8, pin: u8) -> PinConfig {
    PinConfig::new(port, pin, Input, Off, Low, DigitalIo, true, true)
}

/// Board configuration: every bonded-out pin as digital input, PF1 (red LED) driven low,
/// PF4 (SW1) pulled up.
pub static PORT_CONFIGURATION: PortConfigType = PortConfigType {
    pins: [
        dio_in(PORT_A, 0),
        dio_in(PORT_A, 1),
        dio_in(PORT_A, 2),
        dio_in(PORT_A, 3),
        dio_in(PORT_A, 4),
        dio_in(PORT_A, 5),
        dio_in(PORT_A, 6),
        dio_in(PORT_A, 7),

        dio_in(PORT_B, 0),
        dio_in(PORT_B, 1),
        dio_in(PORT_B, 2),
        dio_in(PORT_B, 3),
        dio_in(PORT_B, 4),
        dio_in(PORT_B, 5),
        dio_in(PORT_B, 6),
        dio_in(PORT_B, 7),

        dio_in(PORT_C, 0),
        dio_in(PORT_C, 1),
        dio_in(PORT_C, 2),
        dio_in(PORT_C, 3),
        dio_in(PORT_C, 4),
        dio_in(PORT_C, 5),
        dio_in(PORT_C, 6),
        dio_in(PORT_C, 7),

        dio_in(PORT_D, 0),
        dio_in(PORT_D, 1),
        dio_in(PORT_D, 2),
        dio_in(PORT_D, 3),
        dio_in(PORT_D, 4),
        dio_in(PORT_D, 5),
        dio_in(PORT_D, 6),
        dio_in(PORT_D, 7),

        dio_in(PORT_E, 0),
        dio_in(PORT_E, 1),
        dio_in(PORT_E, 2),
        dio_in(PORT_E, 3),
        dio_in(PORT_E, 4),
        dio_in(PORT_E, 5),

        dio_in(PORT_F, 0),
        PinConfig::new(PORT_F, 1, Output, Off, Low, DigitalIo, true, true),
        dio_in(PORT_F, 2),
        dio_in(PORT_F, 3),
        PinConfig::new(PORT_F, 4, Input, PullUp, Low, DigitalIo, true, true),
    ],
};
