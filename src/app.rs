//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    admin::AdminPage, chat_room::ChatRoomPage, conversations::ConversationsPage, feed::FeedPage,
    login::LoginPage, post_detail::PostDetailPage, post_edit::PostEditPage, post_new::PostNewPage,
    profile::ProfilePage,
};
use crate::state::{auth::AuthState, categories::CategoriesState, feed::FeedState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, reads the stored session, warms the
/// category cache, and sets up client-side routing. Chat state is
/// deliberately not provided here; each chat room owns its own signal so
/// leaving a room tears its transport down with it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let feed = RwSignal::new(FeedState::default());
    let categories = RwSignal::new(CategoriesState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(feed);
    provide_context(categories);
    provide_context(ui);

    // Mirror browser storage into the auth signal once hydrated.
    Effect::new(move || {
        auth.set(AuthState::from_storage());
    });

    // Warm the category cache for filter chips and composer dropdowns.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::categories().await {
            Ok(items) => categories.update(|c| c.fill(items)),
            Err(e) => log::warn!("category fetch failed: {e}"),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/plaza.css"/>
        <Title text="Plaza"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FeedPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("posts"), StaticSegment("new")) view=PostNewPage/>
                <Route path=(StaticSegment("posts"), ParamSegment("id")) view=PostDetailPage/>
                <Route
                    path=(StaticSegment("posts"), ParamSegment("id"), StaticSegment("edit"))
                    view=PostEditPage
                />
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("conversations") view=ConversationsPage/>
                <Route path=(StaticSegment("conversations"), ParamSegment("id")) view=ChatRoomPage/>
            </Routes>
        </Router>
    }
}
