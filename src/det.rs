//! Development error tracer sink.
//!
//! Drivers report precondition violations here as `(module, instance, api, error)` tuples.
//! Reports are fire-and-forget; nothing comes back to the caller.

pub trait DetReporter {
    fn report_error(&self, module_id: u16, instance_id: u8, api_id: u8, error_id: u8);
}

impl<T: DetReporter + ?Sized> DetReporter for &T {
    fn report_error(&self, module_id: u16, instance_id: u8, api_id: u8, error_id: u8) {
        (**self).report_error(module_id, instance_id, api_id, error_id)
    }
}

/// Forwards every report to the `log` facade at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDet;

impl DetReporter for LogDet {
    fn report_error(&self, module_id: u16, instance_id: u8, api_id: u8, error_id: u8) {
        log::error!(
            "DET: module {} instance {} api 0x{:02x} error 0x{:02x}",
            module_id,
            instance_id,
            api_id,
            error_id
        );
    }
}
