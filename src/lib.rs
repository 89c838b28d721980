//! Encoji - hide bytes in text with Unicode variation selectors
//!
//! Each payload byte becomes one variation selector placed right after a
//! visible carrier character. Selectors have no glyph of their own, so the
//! text looks unchanged while carrying the payload.
//!
//! ## Mapping
//!
//! ```text
//! byte 0x00..=0x0F  ->  U+FE00..=U+FE0F
//! byte 0x10..=0xFF  ->  U+E0100..=U+E01EF
//! ```
//!
//! Decoding maps every character back through the same table. Characters
//! that are not selectors become newlines and the result is trimmed, which
//! drops the carrier and any surrounding text.
//!
//! ## Example
//!
//! ```
//! use encoji::{embed, extract};
//!
//! let hidden = embed("😀", b"Hi").unwrap();
//! assert_eq!(hidden.chars().next(), Some('😀'));
//! assert_eq!(extract(&hidden).unwrap(), b"Hi");
//! ```
//!
//! Line by line over a reader:
//!
//! ```
//! use encoji::{PayloadSource, Smuggler, SmugglerConfig};
//!
//! let config = SmugglerConfig::encode(&PayloadSource::Text("secret".into())).unwrap();
//! let mut out = Vec::new();
//! Smuggler::new(config).run("first\nsecond\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
//! ```

pub mod config;
pub mod error;
pub mod selector;
pub mod smuggler;
pub mod transform;

pub use config::{Mode, PayloadSource, SmugglerConfig};
pub use error::{EncojiError, Result};
pub use selector::{from_selector, is_selector, to_selector};
pub use smuggler::Smuggler;
pub use transform::{embed, extract, extract_lossy};
