//! UI Components
//!
//! Reusable pieces shared across pages. Each component owns its own
//! markup and local state; data comes in through props and context.

pub mod connected_users;
pub mod create_post_dialog;
pub mod dashboard_stats;
pub mod health_post_filters;
pub mod loading;
pub mod message_button;
pub mod nav;
pub mod post_card;
pub mod toast;
pub mod upcoming_appointments;

pub use connected_users::ConnectedUsers;
pub use create_post_dialog::CreatePostDialog;
pub use dashboard_stats::DashboardStats;
pub use health_post_filters::HealthPostFilters;
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use message_button::MessageButton;
pub use nav::Nav;
pub use post_card::PostCard;
pub use toast::Toast;
pub use upcoming_appointments::UpcomingAppointments;
