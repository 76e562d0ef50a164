//! Typed views over pipeline config files

pub mod multiqc;
