//! File parsers for pipeline config formats

pub mod yaml;
