//! Encoder/decoder for SMS Transfer Protocol Data Units (3GPP TS 23.040) as
//! exchanged with cellular modems in PDU mode.
//!
//! The crate is a pure codec: it turns the octet streams a modem produces or
//! consumes into structured values and back, and leaves the AT-command
//! transport to the caller. Three layers build on each other:
//!
//! - [`tpdu`] marshals and unmarshals the five TPDU message types with their
//!   primitives (addresses, timestamps, data coding schemes, validity
//!   periods, user data headers);
//! - [`segment`] and [`collect`] handle payloads larger than one TPDU by
//!   splitting into concatenated segments and reassembling them;
//! - [`pdumode`] wraps a marshalled TPDU in the SMSC-prefixed hex frame the
//!   modem expects.
//!
//! # Examples
//!
//! ## Sending a text
//!
//! ```rust
//! use tpdu::pdumode::{self, SmscAddress};
//! use tpdu::segment::{AlphabetChoice, Segmenter};
//! use tpdu::{Address, Marshal};
//!
//! # fn main() -> Result<(), tpdu::CodecError> {
//! let segmenter = Segmenter::new();
//! let parts = segmenter.segment_text(
//!     &Address::international("46708251358"),
//!     "hello from the crate",
//!     AlphabetChoice::Auto,
//! )?;
//!
//! for submit in &parts {
//!     let frame = pdumode::encode_to_str(&SmscAddress::sim_default(), &submit.to_bytes()?)?;
//!     // hand `frame` to AT+CMGS
//!     assert!(frame.chars().all(|c| c.is_ascii_hexdigit()));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Receiving, with reassembly
//!
//! ```rust
//! use std::time::Instant;
//! use tpdu::collect::Collector;
//! use tpdu::{Direction, Tpdu, pdumode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = "07911326040000F0040B911346610089F600002080629173148000";
//! let (_smsc, octets) = pdumode::decode_str(frame)?;
//! let (tpdu, _read) = Tpdu::from_bytes(&octets, Direction::Mt)?;
//!
//! let collector = Collector::new();
//! if let Tpdu::Deliver(deliver) = tpdu {
//!     if let Some(message) = collector.accept(&deliver, Instant::now())? {
//!         println!("{} says: {:?}", message.from, message.payload);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod bcd;
pub mod codec;
pub mod collect;
pub mod gsm7;
pub mod pdumode;
pub mod segment;
pub mod tpdu;
pub mod ucs2;


pub use codec::{CodecError, Direction, Marshal, Unmarshal};
pub use collect::{CollectError, Collector, Message, Payload};
pub use segment::{AlphabetChoice, Segmenter};
pub use tpdu::{
    Address, Alphabet, Command, Concat, Dcs, Deliver, DeliverReport, StatusReport, Submit,
    SubmitReport, Timestamp, Tpdu, UserDataHeader, ValidityPeriod,
};
