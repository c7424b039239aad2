//! `steritrack-procedures` — allocations and usage recording.
//!
//! An allocation dispatches a tray to a procedure; usage entries record
//! consumption against an allocation and are the only sink of stock. All
//! stock arithmetic is routed through the stock store's atomic batches,
//! never hidden inside a record's persistence path.

pub mod error;
pub mod log;
pub mod orchestrator;
pub mod records;
pub mod recorder;

pub use error::ProcedureError;
pub use log::{InMemoryProcedureLog, ProcedureLog};
pub use orchestrator::AllocationOrchestrator;
pub use records::{Allocation, Procedure, Usage};
pub use recorder::UsageRecorder;
