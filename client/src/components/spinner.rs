//! Loading indicator.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional, into)] label: MaybeProp<String>) -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="spinner__ring" aria-hidden="true"></span>
            {move || label.get().map(|text| view! { <span class="spinner__label">{text}</span> })}
        </div>
    }
}
