use core::cell::Cell;
use core::marker::PhantomData;

use critical_section::RestoreState;

use crate::config::PORT_COUNT;

/// Critical-section backed lock guarding one port's shared control registers.
///
/// While held, no other context can run a read-modify-write on the same port. The lock is
/// released when the [`PortGuard`] is dropped, so every exit path of the caller unlocks.
/// All locks share the one global critical section, so holding locks on different ports
/// also serializes, both on the single-core target and with the host `std` implementation.
pub struct PortLock {
    _phantom: PhantomData<()>,
    restore_state: Cell<RestoreState>,
}

// The restore state is only touched between acquire and release of the critical section.
unsafe impl Send for PortLock {}
unsafe impl Sync for PortLock {}

impl PortLock {
    pub const fn new() -> Self {
        Self { _phantom: PhantomData, restore_state: Cell::new(RestoreState::invalid()) }
    }

    pub fn lock(&self) -> PortGuard<'_> {
        let state = unsafe { critical_section::acquire() };
        self.restore_state.set(state);
        PortGuard { lock: self }
    }

    fn unlock(&self) {
        unsafe { critical_section::release(self.restore_state.get()) }
    }
}

/// RAII guard of a [`PortLock`].
pub struct PortGuard<'a> {
    lock: &'a PortLock,
}

impl Drop for PortGuard<'_> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

/// One [`PortLock`] per GPIO port.
pub struct PortLocks {
    locks: [PortLock; PORT_COUNT],
}

impl PortLocks {
    pub const fn new() -> Self {
        const UNLOCKED: PortLock = PortLock::new();
        Self { locks: [UNLOCKED; PORT_COUNT] }
    }

    /// Locks the register set of `port`. `port` must come from a validated table.
    pub fn lock(&self, port: u8) -> PortGuard<'_> {
        self.locks[usize::from(port)].lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_early_return() {
        let locks = PortLocks::new();

        fn touch(locks: &PortLocks, bail: bool) -> Option<()> {
            let _guard = locks.lock(2);
            if bail {
                return None;
            }
            Some(())
        }

        assert_eq!(touch(&locks, true), None);
        // A leaked critical section would deadlock the other thread here.
        std::thread::scope(|s| {
            s.spawn(|| assert_eq!(touch(&locks, false), Some(()))).join().unwrap();
        });
    }

    #[test]
    fn test_distinct_ports_can_nest() {
        let locks = PortLocks::new();
        let _a = locks.lock(0);
        let _f = locks.lock(5);
    }
}
