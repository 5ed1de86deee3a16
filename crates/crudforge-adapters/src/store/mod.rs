//! Record-store adapters for the generic CRUD capability.

pub mod memory;

pub use memory::MemoryRecordStore;
