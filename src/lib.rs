//! Tutorlink library crate: client logic for a tutor marketplace.
//!
//! The library computes pagination windows and footers for tutor listings,
//! round-trips browse filters through shareable query strings, renders star
//! ratings, guards routes against an explicit session context, and talks to
//! the marketplace REST API through mockable gateways.

pub mod browse;
pub mod config;
pub mod marketplace;
pub mod pagination;
pub mod rating;
pub mod session;
pub mod telemetry;

pub use browse::{BrowseFilter, BrowseIntake, TutorPage};
pub use config::{OperationMode, TutorlinkConfig};
pub use marketplace::{
    AccessToken, CachingTutorGateway, ClientError, GatewaySettings, HttpMarketplaceGateway,
    TutorGateway, TutorProfile,
};
pub use pagination::{PageInfo, PageWindow, PaginationFooter, page_window};
pub use rating::StarRating;
pub use session::{GuardDecision, Route, SessionContext};
