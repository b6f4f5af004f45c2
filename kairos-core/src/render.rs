//! Render invalidation
//!
//! Decides *that* a region needs redrawing, never what it looks like.
//! Repeated marks of the same region before the next redraw coalesce into
//! a single invalidation forwarded to the host.

use crate::traits::RedrawScheduler;

/// Named visual areas of the watchface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Time of day text
    Time,
    /// Date text
    Date,
    /// Temperature, conditions and weather icon
    Weather,
    /// Battery meter bar
    Battery,
    /// Charging indicator
    ChargeIcon,
    /// Disconnected indicator
    BluetoothIcon,
    /// Time-derived colour band
    Timewarp,
}

impl Region {
    /// Every region, in draw order
    pub const ALL: [Region; 7] = [
        Region::Time,
        Region::Date,
        Region::Weather,
        Region::Battery,
        Region::ChargeIcon,
        Region::BluetoothIcon,
        Region::Timewarp,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of regions stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionSet {
    bits: u8,
}

impl RegionSet {
    /// Empty set
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Set containing every region
    pub fn all() -> Self {
        Region::ALL.iter().copied().collect()
    }

    /// Add a region. Returns true if it was not already present.
    pub fn insert(&mut self, region: Region) -> bool {
        let was_present = self.contains(region);
        self.bits |= region.bit();
        !was_present
    }

    /// Remove a region
    pub fn remove(&mut self, region: Region) {
        self.bits &= !region.bit();
    }

    /// Check membership
    pub const fn contains(&self, region: Region) -> bool {
        self.bits & region.bit() != 0
    }

    /// True if no region is present
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of regions present
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Remove every region
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Iterate members in draw order
    pub fn iter(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL.iter().copied().filter(|r| self.contains(*r))
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut set = RegionSet::empty();
        for region in iter {
            set.insert(region);
        }
        set
    }
}

/// Coalescing dirty-region tracker
///
/// Components mark regions during a callback; the coordinator forwards the
/// newly marked ones to the host once the callback's work is done.
#[derive(Debug, Clone, Default)]
pub struct RenderDispatcher {
    /// Marked and not yet redrawn
    pending: RegionSet,
    /// Marked but not yet forwarded to the host
    unannounced: RegionSet,
}

impl RenderDispatcher {
    /// Create a dispatcher with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a region dirty
    ///
    /// Idempotent until the region is taken for redraw.
    pub fn mark_dirty(&mut self, region: Region) {
        if self.pending.insert(region) {
            self.unannounced.insert(region);
        }
    }

    /// Mark every region dirty
    pub fn mark_all(&mut self) {
        for region in Region::ALL {
            self.mark_dirty(region);
        }
    }

    /// Forward newly marked regions to the host scheduler
    ///
    /// Returns the number of invalidations forwarded.
    pub fn flush<R: RedrawScheduler + ?Sized>(&mut self, scheduler: &mut R) -> usize {
        let count = self.unannounced.len();
        for region in self.unannounced.iter() {
            scheduler.invalidate(region);
        }
        self.unannounced.clear();
        count
    }

    /// Regions awaiting redraw
    pub fn pending(&self) -> RegionSet {
        self.pending
    }

    /// Take the pending regions for drawing
    ///
    /// After this, marking a taken region forwards a fresh invalidation.
    pub fn take_pending(&mut self) -> RegionSet {
        let taken = self.pending;
        self.pending.clear();
        self.unannounced.clear();
        taken
    }

    /// Put back regions taken for a redraw that did not complete
    ///
    /// They are pending again and are forwarded on the next flush.
    pub fn restore(&mut self, regions: RegionSet) {
        for region in regions.iter() {
            self.mark_dirty(region);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingScheduler {
        invalidated: Vec<Region>,
    }

    impl RedrawScheduler for RecordingScheduler {
        fn invalidate(&mut self, region: Region) {
            self.invalidated.push(region);
        }
    }

    #[test]
    fn test_region_set_basics() {
        let mut set = RegionSet::empty();
        assert!(set.is_empty());
        assert!(set.insert(Region::Battery));
        assert!(!set.insert(Region::Battery));
        assert!(set.insert(Region::Time));
        assert_eq!(set.len(), 2);
        assert!(set.contains(Region::Battery));
        set.remove(Region::Battery);
        assert!(!set.contains(Region::Battery));
        assert_eq!(RegionSet::all().len(), Region::ALL.len());
    }

    #[test]
    fn test_region_set_iterates_in_draw_order() {
        let set: RegionSet = [Region::Timewarp, Region::Time, Region::Battery]
            .into_iter()
            .collect();
        let order: Vec<Region> = set.iter().collect();
        assert_eq!(order, vec![Region::Time, Region::Battery, Region::Timewarp]);
    }

    #[test]
    fn test_mark_dirty_coalesces() {
        let mut dispatcher = RenderDispatcher::new();
        let mut scheduler = RecordingScheduler::default();

        dispatcher.mark_dirty(Region::Battery);
        dispatcher.mark_dirty(Region::Battery);
        assert_eq!(dispatcher.flush(&mut scheduler), 1);

        // Still pending, so a further mark is absorbed
        dispatcher.mark_dirty(Region::Battery);
        assert_eq!(dispatcher.flush(&mut scheduler), 0);

        assert_eq!(scheduler.invalidated, vec![Region::Battery]);
    }

    #[test]
    fn test_take_pending_rearms() {
        let mut dispatcher = RenderDispatcher::new();
        let mut scheduler = RecordingScheduler::default();

        dispatcher.mark_dirty(Region::Time);
        dispatcher.flush(&mut scheduler);
        let taken = dispatcher.take_pending();
        assert!(taken.contains(Region::Time));
        assert!(dispatcher.pending().is_empty());

        dispatcher.mark_dirty(Region::Time);
        dispatcher.flush(&mut scheduler);
        assert_eq!(scheduler.invalidated, vec![Region::Time, Region::Time]);
    }

    #[test]
    fn test_restore_after_failed_redraw() {
        let mut dispatcher = RenderDispatcher::new();
        let mut scheduler = RecordingScheduler::default();

        dispatcher.mark_dirty(Region::Date);
        dispatcher.flush(&mut scheduler);
        let taken = dispatcher.take_pending();

        dispatcher.mark_dirty(Region::Battery);
        dispatcher.restore(taken);

        assert!(dispatcher.pending().contains(Region::Date));
        assert!(dispatcher.pending().contains(Region::Battery));
        assert_eq!(dispatcher.flush(&mut scheduler), 2);
        assert_eq!(scheduler.invalidated, vec![Region::Date, Region::Date, Region::Battery]);
    }

    #[test]
    fn test_mark_all() {
        let mut dispatcher = RenderDispatcher::new();
        let mut scheduler = RecordingScheduler::default();
        dispatcher.mark_all();
        assert_eq!(dispatcher.flush(&mut scheduler), Region::ALL.len());
        assert_eq!(dispatcher.pending(), RegionSet::all());
    }
}
