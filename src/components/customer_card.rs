//! Customer summary card with the status / note workflow.
//!
//! DESIGN
//! ======
//! The card owns only `CustomerCardState`; every decision about whether a
//! status change commits or waits is made there. This module turns DOM events
//! into state transitions and forwards the resulting `StatusUpdate`s to the
//! injected callback. The customer arrives as a signal so changes applied by
//! the owner flow straight back into the card.

use leptos::logging::log;
use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::customer_edit_dialog::CustomerEditDialog;
use crate::components::status_badge::StatusBadge;
use crate::components::status_select::StatusSelect;
use crate::model::{Customer, CustomerPatch, CustomerStatus, StatusUpdate};
use crate::state::customer_card::{CustomerCardState, StatusChange};
use crate::util::dates::{format_date, format_relative};
use crate::util::initials::initials;
use crate::util::notes::latest_note;

/// Card summarizing one customer.
///
/// `on_status_update` receives `(id, status, note?)` whenever the workflow
/// commits; `on_customer_edit` receives the edit-details patch. `now` drives
/// the "Last activity" wording and defaults to the system clock.
#[component]
pub fn CustomerCard(
    #[prop(into)] customer: Signal<Customer>,
    on_status_update: Callback<StatusUpdate>,
    on_customer_edit: Callback<CustomerPatch>,
    #[prop(optional, into)] now: Option<Signal<OffsetDateTime>>,
) -> impl IntoView {
    let state = RwSignal::new(customer.with_untracked(CustomerCardState::new));
    let now = now.unwrap_or_else(|| Signal::derive(OffsetDateTime::now_utc));

    // Keep the selector in step with status changes applied by the owner.
    Effect::new(move || {
        customer.with(|c| state.maybe_update(|s| s.sync_customer(c)));
    });

    let emit = move |update: StatusUpdate| {
        log!(
            "customer {}: status -> {} (note: {})",
            update.customer_id,
            update.status,
            update.note.is_some()
        );
        on_status_update.run(update);
    };

    let on_select_status = Callback::new(move |status: CustomerStatus| {
        let current = customer.get_untracked();
        match state.try_update(|s| s.select_status(&current, status)) {
            Some(StatusChange::Committed(update)) => emit(update),
            Some(StatusChange::Staged) => log!("customer {}: status {status} staged", current.id),
            None => {}
        }
    });

    let on_save = move |_| {
        let current = customer.get_untracked();
        if let Some(update) = state.try_update(|s| s.save(&current)).flatten() {
            emit(update);
        }
    };

    let on_cancel = move |_| {
        let current = customer.get_untracked();
        state.update(|s| s.cancel(&current));
    };

    let on_edit_submit = Callback::new(move |patch: CustomerPatch| {
        on_customer_edit.run(patch);
        state.update(CustomerCardState::close_edit_dialog);
    });
    let on_edit_close = Callback::new(move |()| state.update(|s| s.set_edit_dialog_open(false)));

    let name = move || customer.with(|c| c.name.clone());
    let status = Signal::derive(move || customer.with(|c| c.status));
    let selected_status = Signal::derive(move || state.with(|s| s.selected_status));
    let editing_note = move || state.with(CustomerCardState::is_editing_note);
    let edit_dialog_open = move || state.with(|s| s.edit_dialog_open);

    view! {
        <div class="customer-card">
            <div class="customer-card__header">
                <span class="customer-card__avatar" title=name>
                    {move || customer.with(|c| initials(&c.name))}
                </span>
                <div class="customer-card__identity">
                    <h3 class="customer-card__name">{name}</h3>
                    <div class="customer-card__meta">
                        <StatusBadge status=status/>
                        {move || {
                            customer
                                .with(|c| c.category.clone())
                                .map(|category| view! { <span class="customer-card__category">{category}</span> })
                        }}
                    </div>
                </div>
                <button
                    class="customer-card__edit"
                    on:click=move |_| state.update(CustomerCardState::open_edit_dialog)
                    title="Edit customer details"
                    aria-label="Edit customer details"
                >
                    "✎"
                </button>
            </div>

            <div class="customer-card__body">
                <div class="customer-card__row">
                    <a
                        class="customer-card__email"
                        href=move || customer.with(|c| format!("mailto:{}", c.email))
                        title=move || customer.with(|c| c.email.clone())
                    >
                        {move || customer.with(|c| c.email.clone())}
                    </a>
                </div>
                <div class="customer-card__row">
                    <span class="customer-card__phone">{move || customer.with(|c| c.phone_number.clone())}</span>
                </div>
                <div class="customer-card__row customer-card__row--muted">
                    {move || format!("Added: {}", customer.with(|c| format_date(c.created_at)))}
                </div>
                {move || {
                    customer
                        .with(|c| c.last_contacted)
                        .map(|ts| {
                            view! {
                                <div class="customer-card__row customer-card__row--muted">
                                    {format!("Last activity: {}", format_relative(ts, now.get()))}
                                </div>
                            }
                        })
                }}
                {move || {
                    let visible = customer.with(|c| state.with(|s| s.shows_latest_note(c)));
                    visible
                        .then(|| {
                            let note = customer
                                .with(|c| latest_note(c.notes.as_deref()).unwrap_or_default().to_owned());
                            view! {
                                <div class="customer-card__note">
                                    <h4 class="customer-card__note-title">"Latest Note:"</h4>
                                    <p class="customer-card__note-text">{note}</p>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="customer-card__footer">
                <div class="customer-card__status">
                    <StatusSelect value=selected_status on_change=on_select_status/>
                </div>
                <div class="customer-card__notes">
                    <Show
                        when=editing_note
                        fallback=move || {
                            view! {
                                <button class="btn" on:click=move |_| state.update(CustomerCardState::open_note_editor)>
                                    "Add/Edit Note"
                                </button>
                            }
                        }
                    >
                        <textarea
                            class="customer-card__note-input"
                            placeholder="Add a new note..."
                            rows="2"
                            prop:value=move || state.with(|s| s.draft().to_owned())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                state.update(|s| s.set_draft(text));
                            }
                        ></textarea>
                        <div class="customer-card__note-actions">
                            <button class="btn btn--primary" on:click=on_save>
                                "Save Note & Status"
                            </button>
                            <button class="btn" on:click=on_cancel>
                                "Cancel"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <Show when=edit_dialog_open>
                <CustomerEditDialog
                    customer=customer.get_untracked()
                    on_submit=on_edit_submit
                    on_close=on_edit_close
                />
            </Show>
        </div>
    }
}
