//! Customer list page: header plus one card per customer.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use leptos::logging::warn;
use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::customer_card::CustomerCard;
use crate::components::page_header::PageHeader;
use crate::model::{Customer, CustomerPatch, CustomerStatus, StatusUpdate};
use crate::state::customer_book::CustomerBook;

/// Customer grid backed by an in-memory `CustomerBook`.
///
/// Card updates are applied to `book`; rejected updates are logged and
/// otherwise ignored.
#[component]
pub fn CustomersPage(book: RwSignal<CustomerBook>) -> impl IntoView {
    let on_status_update = Callback::new(move |update: StatusUpdate| {
        let now = OffsetDateTime::now_utc();
        book.update(|b| {
            if let Err(err) = b.apply_status_update(&update, now) {
                warn!("status update rejected: {err}");
            }
        });
    });

    let on_customer_edit = Callback::new(move |patch: CustomerPatch| {
        book.update(|b| {
            if let Err(err) = b.apply_patch(patch) {
                warn!("customer edit rejected: {err}");
            }
        });
    });

    let description = Signal::derive(move || Some(book.with(summary_line)));
    let is_empty = move || book.with(CustomerBook::is_empty);

    view! {
        <div class="customers-page">
            <PageHeader
                title="Customers"
                description=description
                actions=Box::new(move || {
                    view! {
                        <span class="customers-page__legend">
                            {move || book.with(legend_line)}
                        </span>
                    }
                        .into_any()
                })
            />

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="customers-page__empty">"No customers yet."</p> }
            >
                <div class="customers-page__grid">
                    <For
                        each=move || book.with(|b| b.customers().to_vec())
                        key=|c: &Customer| c.id.clone()
                        children=move |snapshot: Customer| {
                            let id = snapshot.id.clone();
                            let customer = Signal::derive(move || {
                                book.with(|b| b.get(&id).cloned()).unwrap_or_else(|| snapshot.clone())
                            });
                            view! {
                                <CustomerCard
                                    customer=customer
                                    on_status_update=on_status_update
                                    on_customer_edit=on_customer_edit
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// `"3 customers"` / `"1 customer"`.
fn summary_line(book: &CustomerBook) -> String {
    match book.len() {
        1 => "1 customer".to_owned(),
        n => format!("{n} customers"),
    }
}

/// Per-status counts in selector order, e.g. `"2 hot · 1 cold · 0 neutral"`.
fn legend_line(book: &CustomerBook) -> String {
    CustomerStatus::ALL
        .iter()
        .map(|&status| format!("{} {status}", book.count_by_status(status)))
        .collect::<Vec<_>>()
        .join(" · ")
}
