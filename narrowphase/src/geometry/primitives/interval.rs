/// Closed 1D interval, the result of projecting a shape onto an axis
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "invalid interval: [{min}, {max}]");
        Interval { min, max }
    }

    /// Smallest interval containing both `self` and `value`
    pub fn expand_to(self, value: f32) -> Self {
        Interval::new(f32::min(self.min, value), f32::max(self.max, value))
    }

    /// Whether the interiors of `self` and `other` intersect.
    /// Intervals which only share an endpoint do not overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &Interval) -> bool {
        other.min < self.max && other.max > self.min
    }

    /// The smaller of the two distances over which `other` could be pushed (in either direction) to stop overlapping `self`.
    ///
    /// Approximates the penetration depth along the axis; for nested intervals this is the
    /// distance to clear the nearest end, not the length of the shared part.
    pub fn smallest_overlap(&self, other: &Interval) -> f32 {
        let (forward, backward) = self.clearances(other);
        f32::min(forward, backward)
    }

    /// Direction (`1.0` or `-1.0`) in which `other` has to move along the axis to clear `self`
    /// over [`Interval::smallest_overlap`].
    pub fn push_direction(&self, other: &Interval) -> f32 {
        let (forward, backward) = self.clearances(other);
        match forward <= backward {
            true => 1.0,
            false => -1.0,
        }
    }

    /// Distances `other` has to travel forwards (past `self.max`) and backwards (past `self.min`).
    #[inline(always)]
    fn clearances(&self, other: &Interval) -> (f32, f32) {
        let forward = (other.min - self.max).abs();
        let backward = (other.max - self.min).abs();
        (forward, backward)
    }
}
