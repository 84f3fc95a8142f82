// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event time stamps and the clock that produces them.

/// Milliseconds since the Unix epoch.
///
/// Carried as the `when` field of every toolkit input event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a time stamp from milliseconds since the Unix epoch.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch.
    pub const fn as_millis(self) -> u64 {
        self.0
    }
}

/// Source of event time stamps.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// A clock that always reports the same instant.
///
/// Useful for replaying recorded input and for deterministic tests.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Wall clock backed by [`std::time::SystemTime`].
///
/// A system time before the epoch reads as `Timestamp(0)`.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Timestamp(millis)
    }
}
