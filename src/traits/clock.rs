//! Source of the current time for deadline checks.

use std::rc::Rc;
use std::sync::Arc;

use crate::domain::Timestamp;

/// A monotonic clock.
///
/// Deadlines are the only cancellation mechanism of the pool: an
/// operation whose deadline is earlier than [`now`](Clock::now) fails with
/// [`PoolError::Expired`](crate::error::PoolError::Expired).
pub trait Clock {
    /// Current time.
    fn now(&self) -> Timestamp;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Rc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
