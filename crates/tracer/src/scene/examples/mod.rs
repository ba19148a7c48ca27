mod ivory;
mod mirrors;
mod spheres;

pub use ivory::IvoryScene;
pub use mirrors::MirrorsScene;
pub use spheres::SpheresScene;
