pub trait Operation: Send + 'static {
    fn name(&self) -> &'static str;
}
