//! umbra-infra: desktop adapters (settings backend, file picker) and the
//! background synchronizer.

pub mod environment;
pub mod output;
pub mod picker;
pub mod settings;
pub mod sync;
