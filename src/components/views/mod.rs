mod discover;

pub use discover::Discover;
