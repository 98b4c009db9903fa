pub mod block;
pub mod extract;
pub mod names;
pub mod render;

pub mod prelude {
    pub use crate::extract::extract_from_path;
    pub use crate::render::render_list;
}
