// src/generators/mod.rs
pub mod hash;
pub mod password;
pub mod qr;
pub mod uuid;
