pub mod prefabs;
pub mod viewer_scene;
