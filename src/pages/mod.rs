//! Pages
//!
//! Top-level route views. Each page composes components and owns the
//! data fetching for its route.

pub mod dashboard;
pub mod health_talk;
pub mod login;
pub mod messages;

pub use dashboard::DashboardPage;
pub use health_talk::HealthTalkPage;
pub use login::LoginPage;
pub use messages::MessagesPage;
