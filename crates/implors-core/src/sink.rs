/// Receiver for descriptor batches handed over by an
/// [`ImplementorRegistry`](crate::ImplementorRegistry).
///
/// A delivery is an ordered sequence of `(module key, descriptors)` pairs.
/// The consumer receives the whole buffered backlog as one delivery when it
/// attaches, and a single-pair delivery for every submission after that.
pub trait ImplementorSink {
    fn ingest(&mut self, delivery: &[(&str, &[String])]);
}

/// Closures work as sinks directly, so an attach call site can stay a
/// one-liner.
impl<F> ImplementorSink for F
where
    F: FnMut(&[(&str, &[String])]),
{
    fn ingest(&mut self, delivery: &[(&str, &[String])]) {
        self(delivery)
    }
}
