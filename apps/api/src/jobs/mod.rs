// Job matching: source adapters, aggregation, embedding-based scoring, ranking.
// Provider failures degrade to empty results; only embedding errors surface.

pub mod aggregator;
pub mod embedding;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod ranker;
pub mod scorer;
pub mod sources;
