//! Signed-in account operation.

use std::io::{self, Write};

use tutorlink::marketplace::AuthGateway;
use tutorlink::session::load_session;
use tutorlink::{ClientError, TutorGateway, TutorlinkConfig};

use super::output::write_session;
use super::{build_http_gateway, telemetry_sink};

/// Shows the account behind the configured token.
///
/// # Errors
///
/// Returns [`ClientError::MissingToken`] when no token is configured and
/// propagates gateway failures other than a rejected token.
pub async fn run(config: &TutorlinkConfig) -> Result<(), ClientError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(
        config,
        |loaded| build_http_gateway(loaded, telemetry_sink(loaded)),
        &mut stdout,
    )
    .await
}

/// Shows the signed-in account using a custom gateway builder.
///
/// The token is checked before the gateway is built, so a missing token
/// never reaches the network.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &TutorlinkConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), ClientError>
where
    G: AuthGateway + TutorGateway,
    F: FnOnce(&TutorlinkConfig) -> Result<G, ClientError>,
    W: Write,
{
    let token = config.resolve_token()?;
    let gateway = build_gateway(config)?;
    let session = load_session(&gateway, &gateway, Some(&token)).await?;
    write_session(writer, &session)
}
