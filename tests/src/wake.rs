mod cache;
mod integration;
