pub mod assets;
pub mod manifest;
pub mod versions;
