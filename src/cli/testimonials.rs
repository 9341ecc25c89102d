//! Testimonial listing operation.

use std::io::{self, Write};

use tutorlink::marketplace::FeedbackGateway;
use tutorlink::{ClientError, TutorlinkConfig};

use super::output::write_testimonials;
use super::{build_http_gateway, telemetry_sink};

/// Lists published testimonials.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn run(config: &TutorlinkConfig) -> Result<(), ClientError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(
        config,
        |loaded| build_http_gateway(loaded, telemetry_sink(loaded)),
        &mut stdout,
    )
    .await
}

/// Lists testimonials using a custom gateway builder.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &TutorlinkConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), ClientError>
where
    G: FeedbackGateway,
    F: FnOnce(&TutorlinkConfig) -> Result<G, ClientError>,
    W: Write,
{
    let gateway = build_gateway(config)?;
    let testimonials = gateway.testimonials().await?;
    write_testimonials(writer, &testimonials)
}
