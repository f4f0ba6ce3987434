pub mod branding;
pub mod export_set;
pub mod icns_create;
pub mod ico_create;
