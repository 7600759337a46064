pub mod list;
pub mod post;
pub mod recent;
pub mod render;
#[cfg(feature = "github")]
pub mod repos;
