//! scte35-rs: typed encryption metadata for SCTE 35 `splice_info_section`s.
//!
//! This library provides the decoded encryption fields of a splice
//! information section ([`EncryptedPacket`]) and the classification of the
//! 6-bit cipher field defined by SCTE 35 section 11.3 (in the [`cipher`]
//! module). Reading and writing the fields from a bitstream is left to the
//! surrounding codec.

pub mod cipher;
pub use cipher::{classify, Cipher, EncryptionAlgorithm};

mod encrypted_packet;
pub use encrypted_packet::EncryptedPacket;

mod error;
pub use error::EncryptionError;

#[macro_use]
pub mod fmt;

pub use fmt::{LogOutput, Loggable, Logger};
