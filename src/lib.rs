pub mod analyzers;
pub mod output;
pub mod parser;
pub mod range;
pub mod records;
pub mod stats;
