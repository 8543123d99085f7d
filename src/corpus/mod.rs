//! Corpus accumulation for both schemes

mod nps;
mod ups;

pub use nps::NpsAccumulator;
pub use ups::UpsCorpusTracker;
