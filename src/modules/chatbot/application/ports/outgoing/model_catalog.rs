use async_trait::async_trait;

#[async_trait]
pub trait ModelCatalog: Send + Sync {
    /// Model identifiers to try, highest version first. Never empty when
    /// a fallback list is configured.
    async fn candidate_models(&self) -> Vec<String>;
}
