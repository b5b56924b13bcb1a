// Briquette: compact word-vector bundles for video content classification
//
// This is the library root. Each module corresponds to a stage of the
// bundle pipeline: fetch a pretrained model, define the vocabulary,
// filter and write the bundle.

pub mod bundle;
pub mod config;
pub mod model;
pub mod vocabulary;
