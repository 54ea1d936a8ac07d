use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::{DAY_MILLIS, J2000_UNIX_MILLIS};

/// The animation rate of a typical orrery view, in simulated days per real
/// second: one day every minute.
pub const ANIMATION_DAYS_PER_SECOND: f64 = 1.0 / 60.0;

/// A source of "now".
///
/// Reading the wall clock is the only impure thing a position query does,
/// so it lives behind this trait. Tests and replays can pin the time with
/// [`FixedClock`], while a live renderer uses [`SystemClock`].
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// A [`Clock`] that reads the system time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A [`Clock`] that always returns the same instant.
///
/// Serializes as an RFC 3339 timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for FixedClock {
    /// A clock stopped at the J2000 epoch.
    fn default() -> Self {
        Self(j2000())
    }
}

/// A [`Clock`] that runs faster (or slower, or backwards) than its source.
///
/// Simulated time starts at `epoch` when the clock is created and then
/// advances `rate` simulated days for every second that passes on the
/// source clock. A rate of zero pauses the clock.
///
/// Instants that would fall outside the range [`DateTime`] can represent
/// are clamped to its ends.
///
/// # Example
/// ```
/// use solar_orbits::{j2000, Clock, FixedClock, ScaledClock};
///
/// // A source clock that never moves keeps the simulation at its epoch.
/// let clock = ScaledClock::new(FixedClock(j2000()), j2000(), 10.0);
/// assert_eq!(clock.now(), j2000());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledClock<C = SystemClock> {
    source: C,
    started_at: DateTime<Utc>,
    epoch: DateTime<Utc>,
    rate: f64,
}

impl<C: Clock> ScaledClock<C> {
    /// Starts a clock at `epoch`, running `rate` simulated days per source second.
    pub fn new(source: C, epoch: DateTime<Utc>, rate: f64) -> Self {
        let started_at = source.now();

        Self {
            source,
            started_at,
            epoch,
            rate,
        }
    }

    /// Starts a clock at J2000 running at [`ANIMATION_DAYS_PER_SECOND`].
    pub fn animation(source: C) -> Self {
        Self::new(source, j2000(), ANIMATION_DAYS_PER_SECOND)
    }

    /// The simulated instant the clock started at.
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// The rate, in simulated days per source second.
    pub fn rate_days_per_second(&self) -> f64 {
        self.rate
    }

    /// Changes the rate without jumping.
    ///
    /// The current simulated instant becomes the new epoch, so time
    /// continues from where it was.
    pub fn set_rate_days_per_second(&mut self, rate: f64) {
        self.epoch = self.now();
        self.started_at = self.source.now();
        self.rate = rate;
    }

    /// Seconds elapsed on the source clock since the clock started.
    pub fn elapsed_seconds(&self) -> f64 {
        let elapsed = self.source.now() - self.started_at;

        match elapsed.num_microseconds() {
            Some(micros) => micros as f64 / 1e6,
            None => elapsed.num_milliseconds() as f64 / 1e3,
        }
    }
}

impl<C: Clock> Clock for ScaledClock<C> {
    fn now(&self) -> DateTime<Utc> {
        let offset_millis = self.elapsed_seconds() * self.rate * DAY_MILLIS;
        let saturated = if offset_millis < 0.0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };

        if !offset_millis.is_finite() || offset_millis.abs() >= i64::MAX as f64 {
            return saturated;
        }

        TimeDelta::try_milliseconds(offset_millis.round() as i64)
            .and_then(|offset| self.epoch.checked_add_signed(offset))
            .unwrap_or(saturated)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The J2000.0 epoch, 2000-01-01T12:00:00 UTC.
pub fn j2000() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(J2000_UNIX_MILLIS)
}

/// The number of days (fractional) between the J2000 epoch and `instant`.
///
/// Instants before the epoch give negative values.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use solar_orbits::days_since_j2000;
///
/// let instant = Utc.with_ymd_and_hms(2000, 1, 2, 0, 0, 0).unwrap();
/// assert_eq!(days_since_j2000(instant), 0.5);
/// ```
pub fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    (instant.timestamp_millis() - J2000_UNIX_MILLIS) as f64 / DAY_MILLIS
}
