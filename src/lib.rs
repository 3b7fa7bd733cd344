#![no_std]

//! A resumable decoder for Minecraft's Named Binary Tag (NBT) format.
//!
//! Nbtflow decodes NBT documents into an owned [`value::Value`] tree without
//! ever requiring the whole document in memory at once. Bytes may be supplied
//! in arbitrarily sized chunks (straight from a socket or a decompressor), and
//! every nested list or compound keeps its own partial progress between calls.
//!
//! Both byte orders of the format are supported: big-endian as written by Java
//! Edition, and little-endian as written by Bedrock Edition. See
//! [`config::Edition`].
//!
//! Most users should begin with the functions in the [`avec`] module, which
//! drive a decoder over a slice, a sequence of chunks, or a buffered reader. If
//! these prove insufficient, feed chunks to a [`sans::Decoder`] directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
pub mod config;
pub mod sans;
pub mod value;
