//! Configuration module

mod site;

pub use site::PortalConfig;
pub use site::RevealConfig;
