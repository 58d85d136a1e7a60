//! Page components for the Contact Card shell.

mod feed;

pub use feed::Feed;
