//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{DashboardPage, HealthTalkPage, LoginPage, MessagesPage};
use crate::state::global::provide_global_state;
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state and the restored session to all components
    provide_global_state();
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=DashboardPage />
                        <Route path="/health-talk" view=HealthTalkPage />
                        <Route path="/messages/:id" view=MessagesPage />
                        <Route path="/login" view=LoginPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white rounded-lg font-medium
                       transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
