// Grist: TF-IDF resume screening against a job description
//
// This is the library root. Each module corresponds to a stage of the
// screening pipeline: extraction feeds the scoring core, output renders
// what the core produced.

pub mod config;
pub mod extract;
pub mod output;
pub mod scoring;
