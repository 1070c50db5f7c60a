//! Payment QR production: build the URI, render it, write it

use crate::error::Result;
use crate::output::{ArtifactKind, OutputWriter, QrArtifact};
use crate::payment::{Payee, PaymentRequest, UpiUriBuilder};
use crate::qr::{QrDecoder, QrPayload, QrRenderer, QrStyle, StyledRenderer};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

/// Produces payment QR images for one payee
pub struct PaymentQrProducer<R: QrRenderer = StyledRenderer> {
    payee: Payee,
    builder: UpiUriBuilder,
    renderer: R,
    writer: OutputWriter,
    static_style: QrStyle,
    amount_style: QrStyle,
    verifier: Option<QrDecoder>,
}

impl PaymentQrProducer<StyledRenderer> {
    /// Producer using the default styled renderer
    pub fn new(payee: Payee, builder: UpiUriBuilder, writer: OutputWriter) -> Result<Self> {
        Self::with_renderer(payee, builder, writer, StyledRenderer::new())
    }
}

impl<R: QrRenderer> PaymentQrProducer<R> {
    /// Producer using a caller-supplied renderer
    pub fn with_renderer(
        payee: Payee,
        builder: UpiUriBuilder,
        writer: OutputWriter,
        renderer: R,
    ) -> Result<Self> {
        payee.validate()?;
        Ok(Self {
            payee,
            builder,
            renderer,
            writer,
            static_style: QrStyle::default().with_module_size(15),
            amount_style: QrStyle::default(),
            verifier: None,
        })
    }

    /// Styles for the open-amount and fixed-amount codes
    pub fn with_styles(mut self, static_style: QrStyle, amount_style: QrStyle) -> Self {
        self.static_style = static_style;
        self.amount_style = amount_style;
        self
    }

    /// Decode every rendered image and fail if it does not match its URI
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verifier = enabled.then(QrDecoder::new);
        self
    }

    /// The output writer
    pub fn writer(&self) -> &OutputWriter {
        &self.writer
    }

    /// Generate the open-amount QR at its fixed path, replacing any previous one.
    pub fn generate_static(&self) -> Result<QrArtifact> {
        let request = PaymentRequest::open(self.payee.clone())?;
        let path = self.writer.static_path();
        self.produce(&request, &self.static_style, path, ArtifactKind::Static)
    }

    /// Generate a fixed-amount QR under a timestamped name.
    pub fn generate_for_amount(&self, amount: Decimal) -> Result<QrArtifact> {
        let request = PaymentRequest::with_amount(self.payee.clone(), amount)?;
        let path = self.writer.amount_path(amount);
        self.produce(&request, &self.amount_style, path, ArtifactKind::Amount(amount))
    }

    fn produce(
        &self,
        request: &PaymentRequest,
        style: &QrStyle,
        path: PathBuf,
        kind: ArtifactKind,
    ) -> Result<QrArtifact> {
        let uri = self.builder.build(request)?;
        let payload = QrPayload::from(&uri);
        let image = self.renderer.render(&payload, style)?;

        if let Some(verifier) = &self.verifier {
            verifier.verify(&image, &payload)?;
        }

        self.writer.write(&image, &path)?;
        info!(path = %path.display(), uri = %uri, "Generated payment QR");

        Ok(QrArtifact { path, uri, kind })
    }
}
