//! Dictionary Bot Library
//!
//! A chat bot command that looks up English words in a WordNet lexicon.
//!
//! This crate provides the core functionality for:
//! - Loading, validating and searching a JSON WordNet lexicon
//! - Formatting definitions grouped by part of speech
//! - Rendering replies as chat markup or plain text
//! - Handling user commands via chat messages

pub mod commands;
pub mod config;
pub mod lexicon;
pub mod render;
