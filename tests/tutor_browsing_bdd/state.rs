//! Scenario state and the mock marketplace harness for the tutor browsing
//! BDD tests.

use std::future::Future;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use tutorlink::marketplace::RetryPolicy;
use tutorlink::{
    BrowseFilter, BrowseIntake, ClientError, GatewaySettings, HttpMarketplaceGateway, TutorPage,
};
use wiremock::{Mock, MockServer};

/// Runtime plus mock marketplace API, started once per scenario.
pub(crate) struct MarketplaceHarness {
    server: MockServer,
    runtime: Runtime,
}

impl MarketplaceHarness {
    fn start() -> io::Result<Self> {
        let runtime = Runtime::new()?;
        let server = runtime.block_on(MockServer::start());
        Ok(Self { server, runtime })
    }

    pub(crate) fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub(crate) fn received_request_count(&self) -> usize {
        self.block_on(self.server.received_requests())
            .map_or(0, |requests| requests.len())
    }
}

/// State shared across steps in a browsing scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct BrowseState {
    pub(crate) harness: Slot<Rc<MarketplaceHarness>>,
    pub(crate) query: Slot<String>,
    pub(crate) result: Slot<TutorPage>,
    pub(crate) error: Slot<ClientError>,
}

impl BrowseState {
    /// Returns the scenario's harness, starting it on first use.
    pub(crate) fn harness(&self) -> Rc<MarketplaceHarness> {
        if let Some(existing) = self.harness.get() {
            return existing;
        }
        let started = Rc::new(
            MarketplaceHarness::start()
                .unwrap_or_else(|error| panic!("failed to start marketplace harness: {error}")),
        );
        self.harness.set(Rc::clone(&started));
        started
    }
}

/// Loads the directory page described by the saved query.
pub(crate) fn load_directory(browse_state: &BrowseState) -> Result<TutorPage, ClientError> {
    let harness = browse_state.harness();
    let query = browse_state.query.get().unwrap_or_default();

    let filter = BrowseFilter::deserialize(&query)?;
    let settings = GatewaySettings::new(harness.api_url(), Duration::from_secs(5))
        .with_retry(RetryPolicy::disabled());
    let gateway = HttpMarketplaceGateway::new(&settings)?;

    harness.block_on(async { BrowseIntake::new(&gateway).load(&filter).await })
}
