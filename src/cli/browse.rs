//! Tutor directory browsing operation.

use std::io::{self, Write};
use std::sync::Arc;

use tutorlink::telemetry::TelemetrySink;
use tutorlink::{BrowseIntake, ClientError, TutorGateway, TutorlinkConfig};

use super::output::write_tutor_page;
use super::{build_tutor_gateway, telemetry_sink};

/// Shows one page of the tutor directory.
///
/// # Errors
///
/// Returns [`ClientError::InvalidFilter`] if the saved query is malformed and
/// propagates gateway failures.
pub async fn run(config: &TutorlinkConfig) -> Result<(), ClientError> {
    let telemetry = telemetry_sink(config);
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(
        config,
        |loaded| build_tutor_gateway(loaded, Arc::clone(&telemetry)),
        telemetry.as_ref(),
        &mut stdout,
    )
    .await
}

/// Shows a directory page using a custom gateway builder.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &TutorlinkConfig,
    build_gateway: F,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), ClientError>
where
    G: TutorGateway,
    F: FnOnce(&TutorlinkConfig) -> Result<G, ClientError>,
    W: Write,
{
    let filter = config.browse_filter()?;
    let gateway = build_gateway(config)?;
    let page = BrowseIntake::new(&gateway)
        .with_telemetry(telemetry)
        .load(&filter)
        .await?;
    write_tutor_page(writer, &page)
}
