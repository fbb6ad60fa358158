//! Modal dialog for editing a customer's details.
//!
//! The dialog is mounted by its owner only while open, so the form always
//! starts from the customer's current values.

use leptos::prelude::*;

use crate::components::status_select::StatusSelect;
use crate::model::{Customer, CustomerPatch, CustomerStatus};
use crate::state::customer_form::{CustomerDraft, FormError};

/// Edit-details form in a modal.
///
/// A valid submit hands the patch to `on_submit`; the backdrop, Escape and
/// the Cancel button call `on_close`.
#[component]
pub fn CustomerEditDialog(
    customer: Customer,
    on_submit: Callback<CustomerPatch>,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(CustomerDraft::from(&customer));
    let error = RwSignal::new(None::<FormError>);
    let id = customer.id;

    let submit = Callback::new(move |()| match draft.with(|d| d.submit(&id)) {
        Ok(patch) => {
            error.set(None);
            on_submit.run(patch);
        }
        Err(err) => error.set(Some(err)),
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let status = Signal::derive(move || draft.with(|d| d.status));
    let on_status = Callback::new(move |s: CustomerStatus| draft.update(|d| d.status = s));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--customer-edit"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Edit Customer"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            autofocus=true
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="tel"
                            prop:value=move || draft.with(|d| d.phone_number.clone())
                            on:input=move |ev| draft.update(|d| d.phone_number = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Category"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Status"
                        <StatusSelect value=status on_change=on_status/>
                    </label>

                    {move || error.get().map(|err| view! { <p class="dialog__error">{err.to_string()}</p> })}

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save Changes"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
