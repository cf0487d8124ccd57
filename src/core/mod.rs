pub mod bands;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod fps;
pub mod math;
pub mod pipeline;
pub mod rig;
pub mod ring;
pub mod settings;
pub mod source;

pub use bands::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use fps::*;
pub use pipeline::*;
pub use rig::*;
pub use ring::*;
pub use settings::*;
pub use source::*;

// Shaders bundled as string constants
pub static RINGS_WGSL: &str = include_str!("../../shaders/rings.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
