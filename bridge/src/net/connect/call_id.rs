pub type CallId = u64;

pub trait CallIdGenerator: Send + Sync {
    fn generate(&self) -> CallId;
}
