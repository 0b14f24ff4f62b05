use thiserror::Error;

use crate::port::types::{PinId, PinModeType};

/// DET error id: invalid pin identifier.
pub const PORT_E_PARAM_PIN: u8 = 0x0A;
/// DET error id: pin direction not configured as changeable.
pub const PORT_E_DIRECTION_UNCHANGEABLE: u8 = 0x0B;
/// DET error id: `init` called with an invalid table.
pub const PORT_E_PARAM_CONFIG: u8 = 0x0C;
/// DET error id: mode value not recognized.
pub const PORT_E_PARAM_INVALID_MODE: u8 = 0x0D;
/// DET error id: pin mode not configured as changeable.
pub const PORT_E_MODE_UNCHANGEABLE: u8 = 0x0E;
/// DET error id: service called before `init`.
pub const PORT_E_UNINIT: u8 = 0x0F;

/// Precondition violations. None of them are transient; they indicate a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("port driver used before initialization")]
    Uninit,
    #[error("pin {0} is not a configured pin identifier")]
    InvalidPin(PinId),
    #[error("invalid port configuration table")]
    InvalidConfig,
    #[error("{0} is not a valid pin mode")]
    InvalidMode(PinModeType),
    #[error("direction of pin {0} is not changeable")]
    DirectionUnchangeable(PinId),
    #[error("mode of pin {0} is not changeable")]
    ModeUnchangeable(PinId),
}

impl PortError {
    /// The DET error id reported for this error.
    pub const fn code(&self) -> u8 {
        match self {
            PortError::Uninit => PORT_E_UNINIT,
            PortError::InvalidPin(_) => PORT_E_PARAM_PIN,
            PortError::InvalidConfig => PORT_E_PARAM_CONFIG,
            PortError::InvalidMode(_) => PORT_E_PARAM_INVALID_MODE,
            PortError::DirectionUnchangeable(_) => PORT_E_DIRECTION_UNCHANGEABLE,
            PortError::ModeUnchangeable(_) => PORT_E_MODE_UNCHANGEABLE,
        }
    }
}
