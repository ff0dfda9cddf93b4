use crate::error::Result;
use crate::global_id::InternalId;
use async_trait::async_trait;
use std::future::Future;

/// Fetches records of one node type by internal id.
///
/// Return `Ok(None)` for a record that does not exist. Errors are reserved
/// for failures of the backing store itself.
#[async_trait]
pub trait NodeResolver<N>: Send + Sync {
    async fn fetch(&self, internal_id: InternalId) -> Result<Option<N>>;
}

#[async_trait]
impl<N, F, Fut> NodeResolver<N> for F
where
    N: Send + 'static,
    F: Fn(InternalId) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<N>>> + Send + 'static,
{
    async fn fetch(&self, internal_id: InternalId) -> Result<Option<N>> {
        (self)(internal_id).await
    }
}
