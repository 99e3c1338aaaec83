//! Integration tests for Webscout
//!
//! These tests drive the search tool over real HTTP against local stub
//! servers, verifying the wire behavior of both providers and the failover
//! path end to end.

#[path = "integration/stub_server.rs"]
mod stub_server;

#[path = "integration/failover.rs"]
mod failover;
#[path = "integration/serp_api_wire.rs"]
mod serp_api_wire;
#[path = "integration/serper_wire.rs"]
mod serper_wire;
