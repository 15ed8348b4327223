use leptos::prelude::*;

/// Previous / page label / Next controls for length-probed paging.
///
/// The transactions endpoint reports no total count; the caller derives
/// `has_next` from whether the current page came back full.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Whether a next page is believed to exist
    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback when the page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: space-between; align-items: center; margin-top: 16px;">
            <button
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                style="padding: 8px 16px; background: #6b7280; color: white; border: none; border-radius: 6px; cursor: pointer;"
            >
                "Previous"
            </button>
            <span style="font-size: 0.875rem; color: #495057;">
                {move || format!("Page {}", current_page.get())}
            </span>
            <button
                on:click=move |_| {
                    if has_next.get() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=move || !has_next.get()
                style="padding: 8px 16px; background: #6b7280; color: white; border: none; border-radius: 6px; cursor: pointer;"
            >
                "Next"
            </button>
        </div>
    }
}
