//! Thread pinning for timing trials.
//!
//! On Linux the measuring thread is pinned to the core it is currently
//! running on and the saved affinity mask is restored when the guard drops.
//! Other platforms get a guard that does nothing.

#[cfg(target_os = "linux")]
mod platform {
    /// Affinity mask in effect before pinning
    pub struct Saved(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn save_affinity() -> Option<Saved> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(Saved(set))
        }
    }

    pub fn pin_to(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &Saved) -> bool {
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Saved;

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save_affinity() -> Option<Saved> {
        None
    }

    pub fn pin_to(_core_id: usize) -> bool {
        false
    }

    pub fn restore(_saved: &Saved) -> bool {
        true
    }
}

/// Pins the current thread while alive; restores the previous mask on drop.
pub struct CpuPinGuard {
    saved: Option<platform::Saved>,
    core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let Some(core) = platform::current_cpu() else {
            return Self::inactive();
        };
        let Some(saved) = platform::save_affinity() else {
            return Self::inactive();
        };

        if platform::pin_to(core) {
            Self {
                saved: Some(saved),
                core: Some(core),
            }
        } else {
            tracing::debug!(core, "could not pin thread, timing unpinned");
            Self::inactive()
        }
    }

    fn inactive() -> Self {
        Self {
            saved: None,
            core: None,
        }
    }

    /// Core the thread is pinned to, if pinning succeeded
    pub fn core(&self) -> Option<usize> {
        self.core
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if !platform::restore(&saved) {
                tracing::warn!("failed to restore CPU affinity");
            }
        }
    }
}
