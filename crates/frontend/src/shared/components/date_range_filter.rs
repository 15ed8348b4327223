use crate::shared::components::date_input::DateInput;
use leptos::prelude::*;

/// Start/end date pair with an Apply button.
///
/// The inputs edit the bound signals directly; `on_apply` fires only on
/// the button so a half-typed range never triggers a fetch.
#[component]
pub fn DateRangeFilter(
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    on_apply: Callback<()>,
    /// Label for the apply button
    #[prop(default = "Apply Filter")]
    apply_label: &'static str,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: flex-end; gap: 12px; margin-bottom: 16px; flex-wrap: wrap;">
            <div>
                <label style="display: block; font-size: 0.8rem; color: #495057; margin-bottom: 4px;">"Start Date"</label>
                <DateInput
                    value=start_date
                    on_change=move |val| start_date.set(val)
                />
            </div>
            <div>
                <label style="display: block; font-size: 0.8rem; color: #495057; margin-bottom: 4px;">"End Date"</label>
                <DateInput
                    value=end_date
                    on_change=move |val| end_date.set(val)
                />
            </div>
            <button
                on:click=move |_| on_apply.run(())
                style="padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 0.875rem;"
            >
                {apply_label}
            </button>
        </div>
    }
}
