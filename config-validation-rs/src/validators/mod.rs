//! Validator functions
//!
//! One function per configuration value. Each returns `Ok(())` or the error
//! for the first rule the value breaks.

pub mod app_base_url;
pub mod client;
pub mod issuer;

pub use app_base_url::*;
pub use client::*;
pub use issuer::*;

/// Patterns shared by the URL validators
pub mod patterns {
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        /// Value starts with the https scheme
        pub static ref IS_HTTPS: Regex = Regex::new("^https://").unwrap();
        /// Value carries a scheme separator anywhere
        pub static ref HAS_PROTOCOL: Regex = Regex::new("://").unwrap();
        /// Value ends with a slash
        pub static ref ENDS_IN_PATH: Regex = Regex::new("/$").unwrap();
    }
}
