//! Status `<select>` shared by the card footer and the edit form.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::model::CustomerStatus;

/// Selector over all statuses; reports every change through `on_change`.
#[component]
pub fn StatusSelect(
    #[prop(into)] value: Signal<CustomerStatus>,
    on_change: Callback<CustomerStatus>,
) -> impl IntoView {
    let on_select = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<CustomerStatus>() {
        Ok(status) => on_change.run(status),
        Err(err) => warn!("status select: {err}"),
    };

    view! {
        <select
            class="status-select"
            aria-label="Change customer status"
            prop:value=move || value.get().as_str()
            on:change=on_select
        >
            {CustomerStatus::ALL
                .into_iter()
                .map(|status| {
                    view! {
                        <option value=status.as_str() selected=move || value.get() == status>
                            {status.select_label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
