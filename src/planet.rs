//! The decoded exoplanet record and its derived size categories.

/// Radius (Earth radii) below which a planet is annotated as Earth-like.
pub const EARTH_LIKE_MAX_RADIUS: f64 = 1.5;
/// Radius above which a planet is annotated as gas-giant-like.
pub const GAS_GIANT_MIN_RADIUS: f64 = 10.0;
/// Upper bound of the super-Earth statistics bucket.
pub const SUPER_EARTH_MAX_RADIUS: f64 = 4.0;

/// One row of archive data, independent of which API contract produced it.
///
/// Fields the archive left out or sent as `null` hold their zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetRecord {
    pub name: String,
    pub host: String,
    pub disc_year: i32,
    /// Earth masses
    pub mass: f64,
    /// Earth radii
    pub radius: f64,
    /// Parsecs
    pub distance: f64,
}

impl PlanetRecord {
    pub fn size_class(&self) -> SizeClass {
        SizeClass::from_radius(self.radius)
    }

    pub fn radius_bucket(&self) -> RadiusBucket {
        RadiusBucket::from_radius(self.radius)
    }
}

/// Cosmetic annotation shown next to each listed planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    EarthLike,
    Intermediate,
    GasGiantLike,
}

impl SizeClass {
    pub fn from_radius(radius: f64) -> Self {
        if radius < EARTH_LIKE_MAX_RADIUS {
            SizeClass::EarthLike
        } else if radius > GAS_GIANT_MIN_RADIUS {
            SizeClass::GasGiantLike
        } else {
            SizeClass::Intermediate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::EarthLike => "Earth-like",
            SizeClass::Intermediate => "intermediate",
            SizeClass::GasGiantLike => "gas-giant-like",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SizeClass::EarthLike => "🌍",
            SizeClass::Intermediate => "🔵",
            SizeClass::GasGiantLike => "🪐",
        }
    }
}

/// Mutually exclusive buckets used for summary statistics.
///
/// Boundaries are inclusive on the upper side, unlike [`SizeClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusBucket {
    EarthLike,
    SuperEarth,
    GasGiant,
}

impl RadiusBucket {
    pub fn from_radius(radius: f64) -> Self {
        if radius <= EARTH_LIKE_MAX_RADIUS {
            RadiusBucket::EarthLike
        } else if radius <= SUPER_EARTH_MAX_RADIUS {
            RadiusBucket::SuperEarth
        } else {
            RadiusBucket::GasGiant
        }
    }
}
