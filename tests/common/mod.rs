use parallax_horizons::constants::DEFAULT_SPECTRAL_TYPES;
use parallax_horizons::error_models::AstrometricModel;
use parallax_horizons::horizon::{distance_grid, HorizonProfile};
use parallax_horizons::horizons::Horizons;

/// Evaluate the default spectral types over the canonical grid with the pre-launch model.
pub fn default_profiles() -> Vec<HorizonProfile> {
    let env = Horizons::new(AstrometricModel::PreLaunch).unwrap();
    let grid = distance_grid();
    DEFAULT_SPECTRAL_TYPES
        .iter()
        .map(|spt| env.horizon_profile(spt, &grid).unwrap())
        .collect()
}
