pub mod endpoint;
pub mod mac;
pub mod multicast;
pub mod packet;
