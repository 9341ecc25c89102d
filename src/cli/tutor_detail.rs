//! Single tutor profile operation.

use std::io::{self, Write};

use tutorlink::{ClientError, TutorGateway, TutorlinkConfig};

use super::output::write_tutor_detail;
use super::{build_tutor_gateway, telemetry_sink};

/// Shows the profile selected with `--tutor-id`.
///
/// # Errors
///
/// Returns [`ClientError::Configuration`] if no tutor id is set and
/// [`ClientError::NotFound`] if the tutor does not exist.
pub async fn run(config: &TutorlinkConfig) -> Result<(), ClientError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(
        config,
        |loaded| build_tutor_gateway(loaded, telemetry_sink(loaded)),
        &mut stdout,
    )
    .await
}

/// Shows a tutor profile using a custom gateway builder.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &TutorlinkConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), ClientError>
where
    G: TutorGateway,
    F: FnOnce(&TutorlinkConfig) -> Result<G, ClientError>,
    W: Write,
{
    let tutor_id = config.require_tutor_id()?;
    let gateway = build_gateway(config)?;
    let tutor = gateway.tutor_profile(tutor_id).await?;
    write_tutor_detail(writer, &tutor)
}
