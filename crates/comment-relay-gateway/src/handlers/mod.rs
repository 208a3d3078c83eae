//! HTTP request handlers.
//!
//! This module contains all the endpoint handlers for the relay.

pub mod comments;
pub mod health;
