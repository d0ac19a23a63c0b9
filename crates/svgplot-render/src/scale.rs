/// Closed data interval `[min, max]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Min/max of `values` by linear scan; `None` when empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        Some(rest.iter().fold(Self::new(first, first), |e, &v| Self {
            min: e.min.min(v),
            max: e.max.max(v),
        }))
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// A zero-width extent grows by 0.5 on each side so it can be mapped onto pixels.
    pub fn widened(self) -> Self {
        if self.span() > 0.0 {
            self
        } else {
            Self {
                min: self.min - 0.5,
                max: self.max + 0.5,
            }
        }
    }

    /// Position of `v` inside the extent, 0 at `min` and 1 at `max`.
    ///
    /// Works on halved values so extents wider than `f64::MAX` still map finitely.
    pub fn fraction(&self, v: f64) -> f64 {
        (v * 0.5 - self.min * 0.5) / (self.max * 0.5 - self.min * 0.5)
    }

    /// Value of tick `i` out of `intervals` equal steps.
    pub fn tick(&self, i: usize, intervals: usize) -> f64 {
        let t = i as f64 / intervals.max(1) as f64;
        self.min * (1.0 - t) + self.max * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_scans_all_values() {
        assert_eq!(Extent::of(&[]), None);
        assert_eq!(
            Extent::of(&[3.0, -1.0, 7.5, 2.0]),
            Some(Extent::new(-1.0, 7.5))
        );
    }

    #[test]
    fn widened_only_touches_degenerate_ranges() {
        assert_eq!(Extent::new(2.0, 2.0).widened(), Extent::new(1.5, 2.5));
        assert_eq!(Extent::new(0.0, 4.0).widened(), Extent::new(0.0, 4.0));
    }

    #[test]
    fn ticks_and_fractions() {
        let e = Extent::new(0.0, 10.0);
        assert_eq!(e.tick(0, 5), 0.0);
        assert_eq!(e.tick(5, 5), 10.0);
        assert_eq!(e.tick(2, 5), 4.0);
        assert_eq!(e.fraction(2.5), 0.25);
    }

    #[test]
    fn huge_extents_stay_finite() {
        let e = Extent::new(-1e308, 1e308);
        assert!(e.span().is_infinite());
        assert_eq!(e.fraction(-1e308), 0.0);
        assert_eq!(e.fraction(1e308), 1.0);
        assert_eq!(e.fraction(0.0), 0.5);
        assert_eq!(e.tick(0, 4), -1e308);
        assert_eq!(e.tick(2, 4), 0.0);
        assert_eq!(e.tick(4, 4), 1e308);
    }
}
