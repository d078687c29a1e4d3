pub mod entities;
pub mod parser;
pub mod ports;
pub mod prompt;
pub mod services;
pub mod value_objects;
