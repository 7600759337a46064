pub mod config;
pub mod post;
pub mod repository;

pub use config::FolioConfig;
pub use post::{Frontmatter, ParsedPost, PostSummary};
pub use repository::Repository;
