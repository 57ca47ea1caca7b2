use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::DatasetError;

/// Shared "caller went away" signal checked by long-running blocking work.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// `Err(Cancelled)` once the flag has been raised.
    pub fn check(&self) -> Result<(), DatasetError> {
        if self.is_cancelled() {
            Err(DatasetError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Guard that raises the flag when dropped. Held by a request future so
    /// a client disconnect (future dropped) stops the blocking worker.
    pub fn drop_guard(&self) -> CancelOnDrop {
        CancelOnDrop(self.clone())
    }
}

pub struct CancelOnDrop(CancelFlag);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_raises_flag_on_drop() {
        let flag = CancelFlag::default();
        assert!(flag.check().is_ok());
        {
            let _guard = flag.drop_guard();
            assert!(!flag.is_cancelled());
        }
        assert!(flag.is_cancelled());
        assert!(matches!(flag.check(), Err(DatasetError::Cancelled)));
    }
}
