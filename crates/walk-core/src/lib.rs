pub mod camera;
pub mod constants;
pub mod input;
pub mod nav;
pub mod scene;
pub mod transition;
pub mod world;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use input::*;
pub use nav::*;
pub use scene::*;
pub use transition::*;
pub use world::*;
