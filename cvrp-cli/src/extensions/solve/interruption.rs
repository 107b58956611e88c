//! Interruption handler.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/interruption_test.rs"]
mod interruption_test;

use cvrp_core::prelude::{GenericResult, Quota};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// The handler can be registered only once per process, so the flag is shared between quotas.
static SHOULD_INTERRUPT: Mutex<Option<Arc<AtomicBool>>> = Mutex::new(None);

/// Creates interruption quota which is reached once Ctrl-C is pressed.
pub fn create_interruption_quota() -> GenericResult<Arc<dyn Quota + Send + Sync>> {
    let mut guard = SHOULD_INTERRUPT.lock().map_err(|_| "interruption flag is poisoned")?;

    let should_interrupt = match guard.as_ref() {
        Some(should_interrupt) => should_interrupt.clone(),
        None => {
            let should_interrupt = Arc::new(AtomicBool::new(false));

            ctrlc::set_handler({
                let should_interrupt = should_interrupt.clone();
                move || {
                    should_interrupt.store(true, Ordering::Relaxed);
                }
            })
            .map_err(|err| format!("cannot set interruption handler: {err}"))?;

            *guard = Some(should_interrupt.clone());
            should_interrupt
        }
    };

    Ok(Arc::new(InterruptionQuota { should_interrupt }))
}

struct InterruptionQuota {
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.should_interrupt.load(Ordering::Relaxed)
    }
}
