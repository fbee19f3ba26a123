pub mod banner;
pub mod logging;
