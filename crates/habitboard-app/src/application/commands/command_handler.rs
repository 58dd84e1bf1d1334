use async_trait::async_trait;
use habitboard_domain::DomainError;

/// A use case that executes a single command against the domain.
///
/// Each handler owns the repositories it needs and exposes exactly one
/// `handle` entry point. The associated `Result` type carries the
/// command-specific payload back to the caller.
#[async_trait]
pub trait CommandHandler<C>: Send + Sync {
    type Result;

    async fn handle(&self, command: C) -> Result<Self::Result, DomainError>;
}
