//! Integration tests
//!
//! Drive the client end-to-end against an in-process books resource.

mod search;
mod server;
