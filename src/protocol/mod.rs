//! Wire protocol vocabulary
//!
//! This module handles:
//! * The fixed command words the bootstrapper sends
//! * Typed decoding of the replies it receives
//!
//! The transport framing itself (RESP encoding, socket I/O) belongs to the
//! `redis` crate; only the command vocabulary and reply shapes live here.

pub mod commands;
pub mod decode;
