//! Colored status badge.

use leptos::prelude::*;

use crate::model::CustomerStatus;
use crate::util::status_style::status_badge_class;

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<CustomerStatus>) -> impl IntoView {
    view! {
        <span class=move || status_badge_class(status.get())>
            {move || status.get().as_str()}
        </span>
    }
}
