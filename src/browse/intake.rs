//! High-level browse facade used by the CLI.

use tracing::info;

use super::filter::BrowseFilter;
use crate::marketplace::error::ClientError;
use crate::marketplace::gateway::TutorGateway;
use crate::marketplace::models::TutorProfile;
use crate::pagination::{PageInfo, PaginationFooter};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// One rendered page of the tutor directory.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorPage {
    /// Tutors on this page.
    pub items: Vec<TutorProfile>,
    /// Position of the page within the result set.
    pub page_info: PageInfo,
    /// Footer computed from `page_info`.
    pub footer: PaginationFooter,
}

/// Loads filtered tutor listings and prepares their pagination footer.
pub struct BrowseIntake<'client, Gateway>
where
    Gateway: TutorGateway,
{
    client: &'client Gateway,
    telemetry: &'client dyn TelemetrySink,
}

impl<'client, Gateway> BrowseIntake<'client, Gateway>
where
    Gateway: TutorGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self {
            client,
            telemetry: &NoopTelemetrySink,
        }
    }

    /// Reports loaded pages to `telemetry`.
    #[must_use]
    pub const fn with_telemetry(mut self, telemetry: &'client dyn TelemetrySink) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Load the page of tutors described by `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidFilter`] before any request is sent when
    /// the filter is inconsistent, and otherwise propagates gateway failures.
    pub async fn load(&self, filter: &BrowseFilter) -> Result<TutorPage, ClientError> {
        filter.validate()?;
        let page = self.client.list_tutors(filter).await?;
        let footer = page.page_info.footer();
        info!(
            page = page.page_info.current_page(),
            total = page.page_info.total_items(),
            "loaded tutor listing"
        );
        self.telemetry.record(TelemetryEvent::TutorPageLoaded {
            page: footer.page(),
            total: page.page_info.total_items(),
        });
        Ok(TutorPage {
            items: page.items,
            page_info: page.page_info,
            footer,
        })
    }
}
