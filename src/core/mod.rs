pub mod sdk;
pub mod ttp;

pub use sdk::{AriseMobileSdk, AriseMobileSdkBuilder};
pub use ttp::AriseMobileTtp;
