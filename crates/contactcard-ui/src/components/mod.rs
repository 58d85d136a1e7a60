//! Contact card components

mod channel_icon;
mod contact_card;
mod emoji;

pub use channel_icon::*;
pub use contact_card::*;
pub use emoji::*;
