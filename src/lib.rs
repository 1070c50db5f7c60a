//! Pehenava payment QR producer and market fixture generator
//!
//! This library builds UPI payment-intent URIs for the Pehenava storefront,
//! renders them as styled QR codes and writes them as PNG files. It also
//! generates randomized market/shop fixtures for seeding the database.
//!
//! # Features
//!
//! - **Payment URIs**: validated, deterministic `upi://pay?...` strings
//! - **Styled QR codes**: rounded or circular modules with a radial gradient
//! - **Pluggable rendering**: swap the [`QrRenderer`] without touching payloads or output
//! - **Fixtures**: seedable JSON market/shop documents
//!
//! # Example
//!
//! ```no_run
//! use pehenava_qr::{OutputWriter, Payee, PaymentQrProducer, UpiUriBuilder};
//! use rust_decimal::Decimal;
//!
//! fn main() -> pehenava_qr::Result<()> {
//!     let producer = PaymentQrProducer::new(
//!         Payee::default(),
//!         UpiUriBuilder::new(),
//!         OutputWriter::default(),
//!     )?;
//!
//!     let artifact = producer.generate_for_amount(Decimal::from(1000))?;
//!     println!("{} -> {}", artifact.uri, artifact.path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod batch;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod output;
pub mod payment;
pub mod producer;
pub mod qr;

// Re-exports for convenience
pub use error::{Error, Result};

pub use batch::{BatchDriver, BatchReport};
pub use config::{LogRotation, LoggingOptions, PehenavaConfig};
pub use fixtures::{Market, MarketGenerator, Shop};
pub use output::{ArtifactKind, OutputWriter, QrArtifact};
pub use payment::{Payee, PaymentRequest, PaymentUri, UpiUriBuilder};
pub use producer::PaymentQrProducer;
pub use qr::{QrDecoder, QrPayload, QrRenderer, QrStyle, StyledRenderer};
