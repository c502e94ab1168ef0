pub mod fingerprint;
pub mod model;
pub mod payload;
pub mod sanitize;
