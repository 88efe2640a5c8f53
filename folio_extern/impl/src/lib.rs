pub mod deliver;
pub mod http;
