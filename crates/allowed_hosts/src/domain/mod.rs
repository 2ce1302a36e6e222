pub mod hosts;

pub use hosts::{allowed_hosts, fill_allowed_hosts};
