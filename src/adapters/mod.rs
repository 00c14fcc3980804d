// Adapters layer: concrete implementations for external systems (feed format, http, storage).

pub mod atom;
pub mod http;
pub mod storage;
