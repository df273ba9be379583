pub mod cli;
pub mod error;
pub mod identity;
pub mod pipeline;
pub mod sink;
pub mod stage;

// Convenient re-exports (so call sites can do `unc::derive_username`, etc.)
pub use error::{UncError, UncResult};
pub use identity::IdentityInput;
pub use pipeline::{DerivedUsername, derive, derive_username};
pub use sink::{NoopSink, StageSink, WriterSink};
pub use stage::{Stage, StageResult};
