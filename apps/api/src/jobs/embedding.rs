//! Embedding backend: turns free text into fixed-length vectors.
//!
//! `RelevanceScorer` holds an `Arc<dyn Embedder>`, so tests can swap in a
//! deterministic fake without loading a model.

use std::sync::Arc;

use async_trait::async_trait;
use model2vec_rs::model::StaticModel;
use thiserror::Error;
use tracing::info;

/// The pretrained sentence-embedding model used for all scoring.
/// Hardcoded so scores stay comparable across deployments.
pub const EMBEDDING_MODEL: &str = "minishlab/potion-base-8M";

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("failed to load embedding model: {0}")]
    Load(String),

    #[error("encoding failed: {0}")]
    Encode(String),

    #[error("embedding call timed out after {0}s")]
    Timeout(u64),

    #[error("expected {expected} embeddings, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

#[async_trait]
pub trait Embedder: Send + Sync {
    /// Encodes each input into one vector, in input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let vectors = self.embed_batch(&[text.to_string()]).await?;
        if vectors.len() != 1 {
            return Err(EmbeddingError::CountMismatch {
                expected: 1,
                actual: vectors.len(),
            });
        }
        Ok(vectors.into_iter().next().unwrap_or_default())
    }
}

/// Model2Vec static embedder. Loaded once at startup and shared read-only;
/// encoding is CPU-bound and runs on the blocking pool.
#[derive(Clone)]
pub struct StaticEmbedder {
    model: Arc<StaticModel>,
}

impl StaticEmbedder {
    /// Downloads (or reads from the HF cache) and loads `EMBEDDING_MODEL`.
    pub async fn load() -> Result<Self, EmbeddingError> {
        info!("Loading embedding model {EMBEDDING_MODEL}...");
        let model = tokio::task::spawn_blocking(|| {
            StaticModel::from_pretrained(EMBEDDING_MODEL, None, None, None)
        })
        .await
        .map_err(|e| EmbeddingError::Load(e.to_string()))?
        .map_err(|e| EmbeddingError::Load(format!("{e:#}")))?;
        info!("Embedding model loaded");

        Ok(Self {
            model: Arc::new(model),
        })
    }
}

#[async_trait]
impl Embedder for StaticEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let model = Arc::clone(&self.model);
        let texts = texts.to_vec();
        let expected = texts.len();

        // A tokenizer panic surfaces here as a JoinError.
        let vectors = tokio::task::spawn_blocking(move || model.encode(&texts))
            .await
            .map_err(|e| EmbeddingError::Encode(e.to_string()))?;

        if vectors.len() != expected {
            return Err(EmbeddingError::CountMismatch {
                expected,
                actual: vectors.len(),
            });
        }
        Ok(vectors)
    }
}

/// Cosine similarity in [-1, 1]. Returns 0.0 for zero vectors or a
/// dimension mismatch so callers never see NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}
