mod rest;
pub use rest::RestConfig;
