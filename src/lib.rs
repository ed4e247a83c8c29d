// src/lib.rs

//! Boletines Library
//!
//! Searches Spanish official gazettes (BOE, BOC, BOP LP, BOP SCTF) for
//! publications matching a user-supplied keyword list.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
