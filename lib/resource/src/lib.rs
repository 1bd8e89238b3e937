//! Data model of the resource compiler: glyph encoding, array resources, resource tables and the
//! resource library handed to a code emitter.
//!
//! Everything in this crate is a pure, allocation-only transformation over static inputs.
#![no_std]

extern crate alloc;

pub mod array;
pub mod glyph;
pub mod ident;
pub mod library;
pub mod table;
