//! End-to-end command flows.

pub mod cryptosign_flow_test;
pub mod message_flow_test;
