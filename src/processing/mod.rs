//! Text processing module
//! Tokenization and ATS keyword scoring

pub mod ats;
