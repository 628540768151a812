//! Stop and time window types.

/// A hard service time window, in seconds from the start of the planning day.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::TimeWindow;
///
/// let tw = TimeWindow::new(3600, 7200).unwrap();
/// assert_eq!(tw.open(), 3600);
/// assert!(tw.contains(5000));
/// assert!(!tw.contains(7201));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    open: i64,
    close: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `open > close` or either bound is negative.
    pub fn new(open: i64, close: i64) -> Option<Self> {
        if open < 0 || close < 0 || open > close {
            return None;
        }
        Some(Self { open, close })
    }

    /// Earliest allowed service start, in seconds.
    pub fn open(&self) -> i64 {
        self.open
    }

    /// Latest allowed service start, in seconds.
    pub fn close(&self) -> i64 {
        self.close
    }

    /// Returns `true` if the given time falls within this window.
    pub fn contains(&self, time: i64) -> bool {
        time >= self.open && time <= self.close
    }

    /// Returns a copy shifted later by `secs` seconds.
    pub fn shifted(&self, secs: i64) -> Self {
        Self {
            open: self.open + secs,
            close: self.close + secs,
        }
    }
}

/// A geographic stop with a signed demand and an optional time window.
///
/// `index` is the stop's position in the dense `0..N` stop array and the only
/// identity the encoder and decoder understand internally. Demand is positive
/// at a pickup, negative (equal magnitude) at its paired delivery, and zero at
/// a depot or neutral stop.
///
/// Stops are value types: updates return a new `Stop` rather than mutating in
/// place, so an instance referenced elsewhere is never changed underneath its
/// holder.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::{Stop, TimeWindow};
///
/// let s = Stop::new(3, 10, 53.38, -1.47)
///     .with_time_window(TimeWindow::new(0, 86_400).unwrap());
/// assert_eq!(s.index(), 3);
/// assert_eq!(s.demand(), 10);
///
/// let cleared = s.cleared_for_depot();
/// assert_eq!(cleared.demand(), 0);
/// assert!(cleared.time_window().is_none());
/// assert_eq!(s.demand(), 10); // original untouched
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    index: usize,
    demand: i64,
    lat: f64,
    lon: f64,
    time_window: Option<TimeWindow>,
}

impl Stop {
    /// Creates a stop with no time window.
    pub fn new(index: usize, demand: i64, lat: f64, lon: f64) -> Self {
        Self {
            index,
            demand,
            lat,
            lon,
            time_window: None,
        }
    }

    /// Sets a time window for this stop.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = Some(tw);
        self
    }

    /// Returns a copy with the given demand.
    pub fn with_demand(&self, demand: i64) -> Self {
        let mut s = self.clone();
        s.demand = demand;
        s
    }

    /// Returns a copy suitable for use as a depot: demand zeroed and the time
    /// window removed (unbounded).
    pub fn cleared_for_depot(&self) -> Self {
        let mut s = self.clone();
        s.demand = 0;
        s.time_window = None;
        s
    }

    /// Position in the dense stop array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Signed demand (positive pickup, negative delivery, zero neutral).
    pub fn demand(&self) -> i64 {
        self.demand
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Time window, if any.
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }
}
