//! Registration handoff between generated implementor-data modules and the
//! page component that indexes them.
//!
//! Each generated data module announces, at load time, which types implement
//! which traits. The modules and the component consuming those announcements
//! load in no guaranteed order relative to each other. [`ImplementorRegistry`]
//! removes that ordering dependency: submissions made before a consumer
//! attaches are buffered and replayed at attach time, submissions made after
//! are handed over directly.

mod registry;
mod sink;

pub use registry::ImplementorRegistry;
pub use sink::ImplementorSink;
