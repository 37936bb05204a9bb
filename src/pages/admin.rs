//! Admin page: category CRUD plus the category-request approval queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Approval and rejection are each a single status transition (PENDING →
//! APPROVED/REJECTED) driven by one call; the page patches its local lists
//! from the response instead of refetching. The client-side admin check is
//! presentation only; the backend re-validates the role on every endpoint.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::category_request_modal::COLOR_OPTIONS;
use crate::net::types::{CategoryInfo, CategoryRequestInfo};
use crate::state::auth::AuthState;
use crate::state::categories::CategoriesState;
use crate::util::dialog::{alert, confirm};
use crate::util::guard::install_admin_redirect;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let category_cache = expect_context::<RwSignal<CategoriesState>>();
    install_admin_redirect(auth, use_navigate());

    let categories = RwSignal::new(Vec::<CategoryInfo>::new());
    let requests = RwSignal::new(Vec::<CategoryRequestInfo>::new());
    let loading = RwSignal::new(true);

    // Create form.
    let new_name = RwSignal::new(String::new());
    let new_label = RwSignal::new(String::new());
    let new_color = RwSignal::new("blue".to_owned());
    let new_has_status = RwSignal::new(false);
    let creating = RwSignal::new(false);

    // Approve form, shown inline for one request at a time.
    let approving_id = RwSignal::new(None::<i64>);
    let approve_label = RwSignal::new(String::new());
    let approve_color = RwSignal::new("blue".to_owned());
    let approve_has_status = RwSignal::new(false);

    // Reject form.
    let rejecting_id = RwSignal::new(None::<i64>);
    let reject_reason = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::admin_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => log::warn!("admin category fetch failed: {e}"),
        }
        match crate::net::api::admin_pending_category_requests().await {
            Ok(list) => requests.set(list),
            Err(e) => log::warn!("request queue fetch failed: {e}"),
        }
        loading.set(false);
    });

    // Keep the shared cache in sync so chips update without a reload.
    let sync_cache = move || {
        category_cache.update(|c| c.fill(categories.get_untracked()));
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if creating.get() {
            return;
        }
        let name = new_name.get().trim().to_ascii_uppercase();
        let label = new_label.get().trim().to_owned();
        if name.is_empty() || label.is_empty() {
            return;
        }
        creating.set(true);
        #[cfg(feature = "hydrate")]
        {
            let color = new_color.get();
            let has_status = new_has_status.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_create_category(&name, &label, &color, has_status).await {
                    Ok(created) => {
                        categories.update(|list| list.push(created));
                        sync_cache();
                        new_name.set(String::new());
                        new_label.set(String::new());
                        new_has_status.set(false);
                    }
                    Err(e) => alert(&format!("Could not create category (duplicate name?): {e}")),
                }
                creating.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, label);
            creating.set(false);
        }
    };

    let on_delete = move |id: i64, label: String| {
        if !confirm(&format!("Delete the \"{label}\" category?")) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_delete_category(id).await {
                Ok(()) => {
                    categories.update(|list| list.retain(|c| c.id != id));
                    sync_cache();
                }
                Err(e) => alert(&format!("Could not delete category: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_approve = move |id: i64| {
        let label = approve_label.get_untracked().trim().to_owned();
        if label.is_empty() {
            alert("Enter a display name first.");
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let color = approve_color.get_untracked();
            let has_status = approve_has_status.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_approve_category_request(id, &label, &color, has_status).await
                {
                    Ok(created) => {
                        requests.update(|list| list.retain(|r| r.id != id));
                        categories.update(|list| list.push(created));
                        sync_cache();
                        approving_id.set(None);
                    }
                    Err(e) => alert(&format!("Could not approve request: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, label);
    };

    let on_reject = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let reason = reject_reason.get_untracked().trim().to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_reject_category_request(id, &reason).await {
                    Ok(_) => {
                        requests.update(|list| list.retain(|r| r.id != id));
                        rejecting_id.set(None);
                        reject_reason.set(String::new());
                    }
                    Err(e) => alert(&format!("Could not reject request: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="admin-page">
            <h1 class="admin-page__heading">"Category Admin"</h1>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="admin-page__loading">"Loading..."</p> }
            >
                <section class="admin-page__section">
                    <h2>"Categories"</h2>
                    <form class="admin-form" on:submit=on_create>
                        <input
                            class="admin-form__input"
                            type="text"
                            placeholder="KEY"
                            prop:value=move || new_name.get()
                            on:input=move |ev| new_name.set(event_target_value(&ev).to_ascii_uppercase())
                        />
                        <input
                            class="admin-form__input"
                            type="text"
                            placeholder="Display name"
                            prop:value=move || new_label.get()
                            on:input=move |ev| new_label.set(event_target_value(&ev))
                        />
                        <select
                            class="admin-form__input"
                            on:change=move |ev| new_color.set(event_target_value(&ev))
                        >
                            {COLOR_OPTIONS
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <option value=c selected=move || new_color.get() == c>
                                            {c}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        <label class="admin-form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || new_has_status.get()
                                on:change=move |ev| new_has_status.set(event_target_checked(&ev))
                            />
                            "Has status workflow"
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || creating.get()>
                            "Create"
                        </button>
                    </form>

                    <ul class="admin-page__categories">
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|cat| {
                                    let id = cat.id;
                                    let label = cat.label.clone();
                                    let delete_label = label.clone();
                                    view! {
                                        <li class="admin-page__category">
                                            <span class=format!("chip chip--{}", cat.color)>{label}</span>
                                            <code class="admin-page__category-name">{cat.name}</code>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_delete(id, delete_label.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>

                <section class="admin-page__section">
                    <h2>{move || format!("Pending Requests ({})", requests.get().len())}</h2>
                    <Show when=move || requests.get().is_empty()>
                        <p class="admin-page__empty">"No pending requests."</p>
                    </Show>
                    <ul class="admin-page__requests">
                        {move || {
                            requests
                                .get()
                                .into_iter()
                                .map(|req| {
                                    let id = req.id;
                                    let requested_label = req.label.clone().unwrap_or_default();
                                    let requested_color =
                                        req.color.clone().unwrap_or_else(|| "blue".to_owned());
                                    let open_approve = move |_| {
                                        approving_id.set(Some(id));
                                        approve_label.set(requested_label.clone());
                                        approve_color.set(requested_color.clone());
                                        approve_has_status.set(false);
                                        rejecting_id.set(None);
                                    };
                                    let open_reject = move |_| {
                                        rejecting_id.set(Some(id));
                                        reject_reason.set(String::new());
                                        approving_id.set(None);
                                    };
                                    view! {
                                        <li class="admin-page__request">
                                            <div class="admin-page__request-summary">
                                                <code>{req.name.clone()}</code>
                                                <span class="admin-page__requester">
                                                    {format!(
                                                        "requested by {}",
                                                        req.requester_nickname.clone().unwrap_or_else(|| "unknown".to_owned()),
                                                    )}
                                                </span>
                                                <button class="btn" on:click=open_approve>
                                                    "Approve"
                                                </button>
                                                <button class="btn btn--danger" on:click=open_reject>
                                                    "Reject"
                                                </button>
                                            </div>
                                            <Show when=move || approving_id.get() == Some(id)>
                                                <div class="admin-page__request-form">
                                                    <input
                                                        class="admin-form__input"
                                                        type="text"
                                                        placeholder="Display name"
                                                        prop:value=move || approve_label.get()
                                                        on:input=move |ev| {
                                                            approve_label.set(event_target_value(&ev));
                                                        }
                                                    />
                                                    <select
                                                        class="admin-form__input"
                                                        on:change=move |ev| {
                                                            approve_color.set(event_target_value(&ev));
                                                        }
                                                    >
                                                        {COLOR_OPTIONS
                                                            .into_iter()
                                                            .map(|c| {
                                                                view! {
                                                                    <option
                                                                        value=c
                                                                        selected=move || approve_color.get() == c
                                                                    >
                                                                        {c}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </select>
                                                    <label class="admin-form__checkbox">
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=move || approve_has_status.get()
                                                            on:change=move |ev| {
                                                                approve_has_status
                                                                    .set(event_target_checked(&ev));
                                                            }
                                                        />
                                                        "Has status workflow"
                                                    </label>
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| on_approve(id)
                                                    >
                                                        "Confirm Approval"
                                                    </button>
                                                </div>
                                            </Show>
                                            <Show when=move || rejecting_id.get() == Some(id)>
                                                <div class="admin-page__request-form">
                                                    <input
                                                        class="admin-form__input"
                                                        type="text"
                                                        placeholder="Reason (shown to requester)"
                                                        prop:value=move || reject_reason.get()
                                                        on:input=move |ev| {
                                                            reject_reason.set(event_target_value(&ev));
                                                        }
                                                    />
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_reject(id)
                                                    >
                                                        "Confirm Rejection"
                                                    </button>
                                                </div>
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
            </Show>
        </div>
    }
}
