//! Hero Saga - hero progression and encounter resolution

pub mod core;
pub mod encounter;
pub mod engine;
pub mod entity;
pub mod world;
