pub mod add;
pub mod administer;
pub mod home;
pub mod pricing;
pub mod request;
pub mod stock;
