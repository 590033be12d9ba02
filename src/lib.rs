pub mod aggregate;
pub mod decode;
pub mod extract;
pub mod ingest;
pub mod report;
pub mod snapshot;
pub mod tables;
