pub mod plan;
pub mod plants;

pub use plan::{post_companions, post_layout, post_materials, post_rotation};
pub use plants::{get_companions, list_plants};
