//! Page title bar with optional description and trailing actions.

use leptos::prelude::*;

/// Header shown at the top of every page.
///
/// The description and the actions slot are only rendered when supplied.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: MaybeProp<String>,
    #[prop(optional)] actions: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__row">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || {
                        description
                            .get()
                            .map(|text| view! { <p class="page-header__description">{text}</p> })
                    }}
                </div>
                {actions.map(|actions| view! { <div class="page-header__actions">{actions()}</div> })}
            </div>
        </div>
    }
}
