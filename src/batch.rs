//! Direct-run batch: one static QR, then one QR per demonstration amount

use crate::error::Result;
use crate::output::QrArtifact;
use crate::producer::PaymentQrProducer;
use crate::qr::QrRenderer;
use rust_decimal::Decimal;
use std::io::Write;

/// Amounts (in rupees) generated by a default run
pub const DEMO_AMOUNTS: [u32; 6] = [1000, 2500, 5000, 10000, 25000, 50000];

/// Everything produced by one batch run, in generation order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// The open-amount QR, if the batch generated one
    pub static_artifact: Option<QrArtifact>,
    /// Fixed-amount QRs
    pub amount_artifacts: Vec<QrArtifact>,
}

impl BatchReport {
    /// Total number of files written
    pub fn len(&self) -> usize {
        self.amount_artifacts.len() + usize::from(self.static_artifact.is_some())
    }

    /// Whether nothing was written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sequences generations and prints progress to `out`.
///
/// The first failure aborts the remaining batch; artifacts written before it
/// stay on disk.
pub struct BatchDriver<'a, R: QrRenderer> {
    producer: &'a PaymentQrProducer<R>,
    include_static: bool,
}

impl<'a, R: QrRenderer> BatchDriver<'a, R> {
    /// Driver that generates the static QR before the amounts
    pub fn new(producer: &'a PaymentQrProducer<R>) -> Self {
        Self {
            producer,
            include_static: true,
        }
    }

    /// Toggle the static QR step
    pub fn include_static(mut self, include: bool) -> Self {
        self.include_static = include;
        self
    }

    /// Run the batch.
    pub fn run<W: Write>(&self, amounts: &[Decimal], out: &mut W) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        writeln!(out, "Pehenava QR Code Generator")?;
        writeln!(out, "{}", "=".repeat(40))?;

        let mut step = 1;
        if self.include_static {
            writeln!(out, "\n{step}. Generating static QR code...")?;
            let artifact = self.producer.generate_static()?;
            writeln!(out, "Static QR Code generated: {}", artifact.path.display())?;
            report.static_artifact = Some(artifact);
            step += 1;
        }

        if !amounts.is_empty() {
            writeln!(out, "\n{step}. Generating QR codes for common amounts...")?;
        }
        for &amount in amounts {
            writeln!(out, "   Generating QR for ₹{}...", group_thousands(amount))?;
            let artifact = self.producer.generate_for_amount(amount)?;
            writeln!(out, "QR Code generated successfully: {}", artifact.path.display())?;
            writeln!(out, "UPI String: {}", artifact.uri)?;
            report.amount_artifacts.push(artifact);
        }

        writeln!(out, "\n✅ All QR codes generated successfully!")?;
        writeln!(
            out,
            "\nQR codes are saved in: {}/",
            self.producer.writer().dir().display()
        )?;
        writeln!(out, "You can use these in your React application.")?;

        tracing::info!(files = report.len(), "Batch complete");
        Ok(report)
    }
}

/// The demonstration amounts as decimals
pub fn demo_amounts() -> Vec<Decimal> {
    DEMO_AMOUNTS.iter().map(|&a| Decimal::from(a)).collect()
}

/// `25000` → `25,000`; used for progress lines only.
fn group_thousands(amount: Decimal) -> String {
    let text = amount.normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputWriter;
    use crate::payment::{Payee, UpiUriBuilder};
    use crate::qr::QrPayload;
    use crate::qr::QrStyle;
    use image::{DynamicImage, RgbImage};
    use std::str::FromStr;

    struct BlankRenderer;

    impl QrRenderer for BlankRenderer {
        fn render(&self, _payload: &QrPayload, _style: &QrStyle) -> Result<DynamicImage> {
            Ok(DynamicImage::ImageRgb8(RgbImage::new(2, 2)))
        }
    }

    fn producer(dir: &std::path::Path) -> PaymentQrProducer<BlankRenderer> {
        PaymentQrProducer::with_renderer(
            Payee::default(),
            UpiUriBuilder::new(),
            OutputWriter::new(dir, "pehenava_payment_qr.png"),
            BlankRenderer,
        )
        .unwrap()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(Decimal::from(1000)), "1,000");
        assert_eq!(group_thousands(Decimal::from(50000)), "50,000");
        assert_eq!(group_thousands(Decimal::from(999)), "999");
        assert_eq!(group_thousands(Decimal::from(1234567)), "1,234,567");
        assert_eq!(group_thousands(Decimal::from_str("2500.50").unwrap()), "2,500.5");
    }

    #[test]
    fn prints_one_status_line_per_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let producer = producer(tmp.path());
        let mut out = Vec::new();

        let report = BatchDriver::new(&producer)
            .run(&demo_amounts(), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(report.len(), 7);
        assert_eq!(text.matches("Static QR Code generated:").count(), 1);
        assert_eq!(text.matches("QR Code generated successfully:").count(), 6);
        assert!(text.contains("Generating QR for ₹10,000..."));
        assert!(text.contains("All QR codes generated successfully!"));
    }

    #[test]
    fn failure_aborts_remaining_amounts() {
        let tmp = tempfile::tempdir().unwrap();
        let producer = producer(tmp.path());
        let amounts = vec![Decimal::from(1000), Decimal::from(-5), Decimal::from(2500)];
        let mut out = Vec::new();

        let result = BatchDriver::new(&producer).run(&amounts, &mut out);

        assert!(result.is_err());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("QR Code generated successfully:").count(), 1);
        assert!(!text.contains("₹2,500"));
        assert!(!text.contains("All QR codes generated successfully!"));
    }

    #[test]
    fn static_step_can_be_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let producer = producer(tmp.path());
        let mut out = Vec::new();

        let report = BatchDriver::new(&producer)
            .include_static(false)
            .run(&[], &mut out)
            .unwrap();

        assert!(report.is_empty());
        assert!(!tmp.path().join("pehenava_payment_qr.png").exists());
    }
}
