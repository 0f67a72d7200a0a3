//! Shortlist HTTP server library (router, state, and handlers).

pub mod gateway;
