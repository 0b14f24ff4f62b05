use crate::config::{PORT_DEV_ERROR_DETECT, PORT_INSTANCE_ID, PORT_MODULE_ID};
use crate::det::DetReporter;
use crate::port::PortError;

/// Service ids reported alongside each error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ServiceId {
    Init = 0x00,
    SetPinDirection = 0x01,
    RefreshPinDirection = 0x02,
    GetVersionInfo = 0x03,
    SetPinMode = 0x04,
}

/// Collects the precondition violations of one service call.
///
/// Every violation is reported as it is found; the call fails with the first one.
pub(crate) struct Checks<'a, D: DetReporter> {
    det: &'a D,
    service: ServiceId,
    first: Option<PortError>,
}

impl<'a, D: DetReporter> Checks<'a, D> {
    pub(crate) fn new(det: &'a D, service: ServiceId) -> Self {
        Self { det, service, first: None }
    }

    pub(crate) fn fail(&mut self, error: PortError) {
        if PORT_DEV_ERROR_DETECT {
            self.det
                .report_error(PORT_MODULE_ID, PORT_INSTANCE_ID, self.service as u8, error.code());
        }
        self.first.get_or_insert(error);
    }

    pub(crate) fn failed(&self) -> bool {
        self.first.is_some()
    }

    pub(crate) fn finish(self) -> Result<(), PortError> {
        match self.first {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
