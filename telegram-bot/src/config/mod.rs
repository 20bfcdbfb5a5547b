//! Bot configuration loaded from env.

mod base;


pub use base::BaseConfig;
