use thiserror::Error;

#[derive(Error, Debug)]
pub enum HorizonsError {
    #[error("Unknown spectral type: {0}")]
    UnknownSpectralType(String),

    #[error("Error during the photometry table parsing: {0}")]
    PhotometryParsingError(String),

    #[error("Chart rendering failed: {0}")]
    Plotting(String),
}
