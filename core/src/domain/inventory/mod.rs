pub mod entities;
pub mod freshness;
pub mod merge;
pub mod ports;
pub mod services;
pub mod value_objects;
