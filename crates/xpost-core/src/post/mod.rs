mod link;
mod models;
mod source;

pub use link::strip_url_prefix;
pub use models::{Post, PostId};
pub use source::{load_posts, parse_posts, sample_posts};
