//! Aggregate statistics over the current record list.

use crate::planet::{PlanetRecord, RadiusBucket};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub earth_like: usize,
    pub super_earth: usize,
    pub gas_giant: usize,
    total_radius: f64,
    total_mass: f64,
}

impl Statistics {
    pub fn compute(records: &[PlanetRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, p| {
            stats.total += 1;
            stats.total_radius += p.radius;
            stats.total_mass += p.mass;
            match p.radius_bucket() {
                RadiusBucket::EarthLike => stats.earth_like += 1,
                RadiusBucket::SuperEarth => stats.super_earth += 1,
                RadiusBucket::GasGiant => stats.gas_giant += 1,
            }
            stats
        })
    }

    pub fn count(&self, bucket: RadiusBucket) -> usize {
        match bucket {
            RadiusBucket::EarthLike => self.earth_like,
            RadiusBucket::SuperEarth => self.super_earth,
            RadiusBucket::GasGiant => self.gas_giant,
        }
    }

    /// Share of the bucket in percent, `None` when there are no records.
    pub fn percent(&self, bucket: RadiusBucket) -> Option<f64> {
        self.ratio(self.count(bucket) as f64).map(|ratio| ratio * 100.0)
    }

    pub fn mean_radius(&self) -> Option<f64> {
        self.ratio(self.total_radius)
    }

    pub fn mean_mass(&self) -> Option<f64> {
        self.ratio(self.total_mass)
    }

    fn ratio(&self, value: f64) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(value / self.total as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_radius(radius: f64) -> PlanetRecord {
        PlanetRecord {
            radius,
            ..Default::default()
        }
    }

    const BUCKETS: [RadiusBucket; 3] = [
        RadiusBucket::EarthLike,
        RadiusBucket::SuperEarth,
        RadiusBucket::GasGiant,
    ];

    #[test]
    fn test_two_planet_example() {
        let stats = Statistics::compute(&[with_radius(1.2), with_radius(12.0)]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.percent(RadiusBucket::EarthLike), Some(50.0));
        assert_eq!(stats.percent(RadiusBucket::SuperEarth), Some(0.0));
        assert_eq!(stats.percent(RadiusBucket::GasGiant), Some(50.0));
        assert!((stats.mean_radius().unwrap() - 6.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_has_no_ratios() {
        let stats = Statistics::compute(&[]);
        assert_eq!(stats.total, 0);
        for bucket in BUCKETS {
            assert_eq!(stats.count(bucket), 0);
            assert_eq!(stats.percent(bucket), None);
        }
        assert_eq!(stats.mean_radius(), None);
        assert_eq!(stats.mean_mass(), None);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let records: Vec<PlanetRecord> = [0.5, 1.5, 1.6, 3.9, 4.0, 4.1, 11.0]
            .into_iter()
            .map(with_radius)
            .collect();
        let stats = Statistics::compute(&records);
        let sum: f64 = BUCKETS.iter().filter_map(|b| stats.percent(*b)).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(stats.earth_like, 2);
        assert_eq!(stats.super_earth, 3);
        assert_eq!(stats.gas_giant, 2);
    }

    #[test]
    fn test_mean_mass() {
        let records = vec![
            PlanetRecord {
                mass: 1.0,
                ..Default::default()
            },
            PlanetRecord {
                mass: 317.8,
                ..Default::default()
            },
        ];
        let stats = Statistics::compute(&records);
        assert!((stats.mean_mass().unwrap() - 159.4).abs() < 1e-9);
    }
}
