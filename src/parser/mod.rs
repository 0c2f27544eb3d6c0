pub mod pararius_parser;

pub use pararius_parser::{Parser, ParariusParser};
