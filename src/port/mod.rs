//! Pin configuration engine.
//!
//! [`Port::init`] programs every entry of a static [`PortConfigType`] into hardware through a
//! [`PortRegisters`] implementation. Afterwards individual pins can have their direction or
//! mode changed at runtime, but only where the table marks that attribute changeable.
//! Precondition violations go to a [`DetReporter`] and are returned as [`PortError`]; a failed
//! call never writes to hardware.

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::{
    PORT_CONFIGURED_PINS, PORT_MODULE_ID, PORT_SW_MAJOR_VERSION, PORT_SW_MINOR_VERSION,
    PORT_SW_PATCH_VERSION, PORT_VENDOR_ID,
};
use crate::det::DetReporter;
use crate::{BIT, BM_IS_SET, BM_SET};

pub mod checks;
pub mod error;
pub mod lock;
pub mod registers;
pub mod types;

#[cfg(all(
    test,
    feature = "set-pin-direction-api",
    feature = "set-pin-mode-api",
    feature = "version-info-api"
))]

use checks::Checks;
pub use checks::ServiceId;
pub use error::PortError;
use lock::PortLocks;
pub use registers::PortRegisters;
pub use types::{
    PinConfig, PinDirection, PinId, PinLevel, PinMode, PinModeType, PinResistor, PortConfigType,
};

/// Version information of this driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionInfo {
    pub vendor_id: u16,
    pub module_id: u16,
    pub sw_major_version: u8,
    pub sw_minor_version: u8,
    pub sw_patch_version: u8,
}

pub const VERSION_INFO: VersionInfo = VersionInfo {
    vendor_id: PORT_VENDOR_ID,
    module_id: PORT_MODULE_ID,
    sw_major_version: PORT_SW_MAJOR_VERSION,
    sw_minor_version: PORT_SW_MINOR_VERSION,
    sw_patch_version: PORT_SW_PATCH_VERSION,
};

/// The port driver.
///
/// Holds the active configuration table once initialized (`None` before). Every register
/// read-modify-write runs under the lock of the port it touches.
pub struct Port<R: PortRegisters, D: DetReporter> {
    registers: R,
    det: D,
    config: Mutex<Cell<Option<&'static PortConfigType>>>,
    locks: PortLocks,
}

impl<R: PortRegisters, D: DetReporter> Port<R, D> {
    pub const fn new(registers: R, det: D) -> Self {
        Self { registers, det, config: Mutex::new(Cell::new(None)), locks: PortLocks::new() }
    }

    pub fn registers(&self) -> &R {
        &self.registers
    }

    pub fn is_initialized(&self) -> bool {
        self.config().is_some()
    }

    fn config(&self) -> Option<&'static PortConfigType> {
        critical_section::with(|cs| self.config.borrow(cs).get())
    }

    /// Programs every pin of `config` and marks the driver initialized.
    ///
    /// The table is validated first; an invalid table is rejected before any register is
    /// touched. Changeable flags do not matter here, every entry is written. Calling this
    /// again re-applies the whole table. Must not run concurrently with any other call.
    pub fn init(&self, config: &'static PortConfigType) -> Result<(), PortError> {
        let mut checks = Checks::new(&self.det, ServiceId::Init);
        if let Err(error) = config.validate() {
            checks.fail(error);
        }
        checks.finish()?;

        critical_section::with(|cs| {
            let mut clocked: u8 = 0;
            for (index, cfg) in config.pins.iter().enumerate() {
                if !BM_IS_SET!(clocked, BIT!(cfg.port)) {
                    self.registers.enable_port_clock(cfg.port);
                    BM_SET!(clocked, BIT!(cfg.port));
                }
                self.apply(cfg);
                log::debug!(
                    "port: pin {} = P{}{} {:?} {:?}",
                    index,
                    port_name(cfg.port),
                    cfg.pin,
                    cfg.direction,
                    cfg.initial_mode
                );
            }
            self.config.borrow(cs).set(Some(config));
        });

        log::info!("port: initialized {} pins", PORT_CONFIGURED_PINS);
        Ok(())
    }

    /// Changes the direction of a pin whose direction is configured changeable.
    #[cfg(feature = "set-pin-direction-api")]
    pub fn set_pin_direction(&self, pin: PinId, direction: PinDirection) -> Result<(), PortError> {
        let mut checks = Checks::new(&self.det, ServiceId::SetPinDirection);
        let entry = self.lookup(&mut checks, pin);
        if let Some(cfg) = entry {
            if !cfg.direction_changeable {
                checks.fail(PortError::DirectionUnchangeable(pin));
            }
        }

        match entry {
            Some(cfg) if !checks.failed() => {
                let _guard = self.locks.lock(cfg.port);
                self.registers.set_direction(cfg.port, cfg.pin, direction);
                log::debug!("port: pin {} direction {:?}", pin, direction);
                Ok(())
            }
            _ => checks.finish(),
        }
    }

    /// Changes the function of a pin whose mode is configured changeable.
    ///
    /// `mode` is the raw [`PinMode`] value. Direction and pulls are left alone.
    #[cfg(feature = "set-pin-mode-api")]
    pub fn set_pin_mode(&self, pin: PinId, mode: PinModeType) -> Result<(), PortError> {
        let mut checks = Checks::new(&self.det, ServiceId::SetPinMode);
        let entry = self.lookup(&mut checks, pin);
        let decoded = PinMode::from_raw(mode);
        if decoded.is_none() {
            checks.fail(PortError::InvalidMode(mode));
        }
        if let Some(cfg) = entry {
            if !cfg.mode_changeable {
                checks.fail(PortError::ModeUnchangeable(pin));
            }
        }

        match (entry, decoded) {
            (Some(cfg), Some(mode)) if !checks.failed() => {
                let _guard = self.locks.lock(cfg.port);
                self.unlocked(cfg, || self.select_mode(cfg, mode));
                log::debug!("port: pin {} mode {:?}", pin, mode);
                Ok(())
            }
            _ => checks.finish(),
        }
    }

    /// Re-applies the configured direction of every pin whose direction is not changeable.
    ///
    /// Pins with a changeable direction are not read or written. Must not run concurrently
    /// with any other call.
    pub fn refresh_pin_direction(&self) -> Result<(), PortError> {
        let mut checks = Checks::new(&self.det, ServiceId::RefreshPinDirection);
        let Some(config) = self.config() else {
            checks.fail(PortError::Uninit);
            return checks.finish();
        };

        critical_section::with(|_| {
            let fixed = config.pins.iter().enumerate().filter(|(_, cfg)| !cfg.direction_changeable);
            for (index, cfg) in fixed {
                let _guard = self.locks.lock(cfg.port);
                let live = self.registers.direction(cfg.port, cfg.pin);
                if live != cfg.direction {
                    log::warn!(
                        "port: pin {} direction drifted to {:?}, restoring {:?}",
                        index,
                        live,
                        cfg.direction
                    );
                }
                self.registers.set_direction(cfg.port, cfg.pin, cfg.direction);
            }
        });
        Ok(())
    }

    #[cfg(feature = "version-info-api")]
    pub fn get_version_info(&self) -> VersionInfo {
        VERSION_INFO
    }

    /// Reports UNINIT and INVALID_PIN as they apply and returns the pin's entry when both
    /// checks pass.
    fn lookup(&self, checks: &mut Checks<'_, D>, pin: PinId) -> Option<&'static PinConfig> {
        let config = self.config();
        if config.is_none() {
            checks.fail(PortError::Uninit);
        }
        if usize::from(pin) >= PORT_CONFIGURED_PINS {
            checks.fail(PortError::InvalidPin(pin));
            return None;
        }
        config.and_then(|config| config.get(pin))
    }

    fn apply(&self, cfg: &PinConfig) {
        let _guard = self.locks.lock(cfg.port);
        self.unlocked(cfg, || {
            self.registers.set_direction(cfg.port, cfg.pin, cfg.direction);
            match cfg.direction {
                PinDirection::Input => self.registers.set_pull(cfg.port, cfg.pin, cfg.resistor),
                PinDirection::Output => {
                    self.registers.set_output_level(cfg.port, cfg.pin, cfg.initial_level)
                }
            }
            self.select_mode(cfg, cfg.initial_mode);
        });
    }

    fn select_mode(&self, cfg: &PinConfig, mode: PinMode) {
        self.registers.set_function(cfg.port, cfg.pin, mode);
        self.registers.set_digital_enable(cfg.port, cfg.pin, mode.is_digital());
    }

    // Runs `f` with the pin's commit protection lifted, if it has any.
    fn unlocked(&self, cfg: &PinConfig, f: impl FnOnce()) {
        let protected = self.registers.requires_unlock(cfg.port, cfg.pin);
        if protected {
            self.registers.unlock(cfg.port, cfg.pin);
        }
        f();
        if protected {
            self.registers.lock(cfg.port);
        }
    }
}

fn port_name(port: u8) -> char {
    char::from(b'A' + port)
}
