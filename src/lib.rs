pub mod constants;
pub mod error_models;
pub mod horizon;
pub mod horizons;
pub mod horizons_errors;
pub mod photometry;
pub mod plot;
