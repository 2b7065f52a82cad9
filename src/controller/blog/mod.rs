pub mod blog;
pub mod generate;

pub use blog::{index, submit};
pub use generate::generate_blog;
