mod customer;
mod post;

pub use customer::Customer;
pub use post::{Post, seed_posts};
