mod scene_output;

pub use scene_output::*;
