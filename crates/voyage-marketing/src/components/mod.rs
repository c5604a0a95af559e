//! Marketing site components

mod nav;
mod footer;
mod cards;
mod icon;

pub use nav::MarketingNav;
pub use footer::Footer;
pub use cards::*;
pub use icon::*;
