mod record;
mod repository;


pub use record::CompletionRecord;
pub use repository::CompletionLogRepository;
