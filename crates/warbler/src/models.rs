//! These models represent the objects passed between the interactive runner,
//! the agent, and the speech tool.
//!
//! Messages mirror the platform's chat transport: a text payload plus an
//! optional MIME type and an optional URL or content id for binary media.
//! A message is built once and never mutated afterwards.
pub mod message;
pub mod tool;
