use std::path::PathBuf;

/// Everything that can go wrong while describing a scene.
///
/// Rendering itself never fails: misses, depth exhaustion and total internal
/// reflection all have defined colors.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("sphere radius must be strictly positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("refractive index must be at least 1.0, got {0}")]
    InvalidRefractiveIndex(f32),
    #[error("specular exponent must be strictly positive, got {0}")]
    InvalidSpecularExponent(f32),
    #[error("light intensity must be positive or zero, got {0}")]
    InvalidIntensity(f32),
    #[error("{0} contains a non finite value")]
    NonFinite(&'static str),
    #[error("unknown material `{0}`")]
    UnknownMaterial(String),
    #[error("could not read scene file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse scene description")]
    Parse(#[from] serde_json::Error),
}
