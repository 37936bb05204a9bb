//! Modal dialog for requesting a new category.
//!
//! Submissions land in the admin's pending queue; the requester sees the
//! outcome (approved category or rejection reason) out of band.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Color keys offered to requesters and admins alike.
pub const COLOR_OPTIONS: [&str; 8] = ["yellow", "blue", "orange", "purple", "green", "red", "pink", "gray"];

#[component]
pub fn CategoryRequestModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let label = RwSignal::new(String::new());
    let color = RwSignal::new("blue".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let close = move || ui.update(|u| u.category_request_open = false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_ascii_uppercase();
        let label_value = label.get().trim().to_owned();
        if name_value.is_empty() || label_value.is_empty() {
            info.set("Enter both a key and a display name.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Submitting...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let color_value = color.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::request_category(&name_value, &label_value, &color_value).await {
                    Ok(_) => {
                        info.set("Request submitted for review.".to_owned());
                        name.set(String::new());
                        label.set(String::new());
                    }
                    Err(e) => info.set(format!("Request failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, label_value);
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Request a Category"</h2>
                <label class="dialog__label">
                    "Key (uppercase)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. BIRDS"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev).to_ascii_uppercase())
                    />
                </label>
                <label class="dialog__label">
                    "Display Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. Birds"
                        prop:value=move || label.get()
                        on:input=move |ev| label.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Color"
                    <select
                        class="dialog__input"
                        on:change=move |ev| color.set(event_target_value(&ev))
                    >
                        {COLOR_OPTIONS
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <option value=c selected=move || color.get() == c>
                                        {c}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "Close"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
