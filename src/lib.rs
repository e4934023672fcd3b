
pub mod error;
pub mod corpus;
pub mod random;
pub mod sections;
pub mod synthesis;
pub mod config;
pub mod generator;
pub mod display;

pub use corpus::DonorCorpus;
pub use generator::WordGenerator;
pub use synthesis::{NewWord, WordSynthesizer};
