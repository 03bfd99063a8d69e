pub mod blog_posts;
pub mod pages;
pub mod properties;
pub mod submissions;
