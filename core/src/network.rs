pub mod broadcast;
pub mod interface;
