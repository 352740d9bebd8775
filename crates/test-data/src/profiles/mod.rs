//! Travel profiles.
//!
//! Profiles define realistic speeds and grade behavior for different ways of
//! traveling; track generation uses them to produce believable timestamps
//! and per-sample speeds.

mod cyclist;
mod hiker;
mod road_trip;

pub use cyclist::CyclistProfile;
pub use hiker::HikerProfile;
pub use road_trip::RoadTripProfile;

/// A way of traveling, reduced to what track timing needs.
pub trait TravelProfile: Send + Sync {
    /// Base speed on flat terrain in meters per second.
    fn base_speed_mps(&self) -> f64;

    /// Speed multiplier for a given grade (a fraction, e.g. 0.05 = 5% uphill).
    ///
    /// Values below 1.0 mean slower than base (uphill), above 1.0 faster
    /// (downhill).
    fn grade_factor(&self, grade: f64) -> f64;

    /// Day-to-day performance variance as a coefficient of variation.
    fn variance(&self) -> f64;
}

/// Speed at a given grade, with a variance factor sampled by the caller.
pub fn speed_at_grade(profile: &dyn TravelProfile, grade: f64, variance_factor: f64) -> f64 {
    let target = profile.base_speed_mps() * profile.grade_factor(grade);
    // Floor keeps generated time steps finite.
    (target * variance_factor).max(0.5)
}

/// Samples a variance multiplier around 1.0 from the profile's spread.
pub fn sample_variance(profile: &dyn TravelProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    let std_dev = profile.variance();
    if std_dev > 0.0 {
        let normal = Normal::new(1.0, std_dev).unwrap();
        let sample: f64 = normal.sample(rng);
        sample.clamp(0.7, 1.4)
    } else {
        1.0
    }
}
