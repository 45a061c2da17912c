use leptos::prelude::*;

use crate::store::Progress;

/// Completion summary shown above a non-empty list
#[component]
pub fn ProgressPanel(#[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    view! {
        <div class="progress-panel">
            <div class="progress-heading">
                <h2>"Progress"</h2>
                <span class="progress-count">
                    {move || {
                        let p = progress.get();
                        format!("{} of {}", p.done, p.total)
                    }}
                </span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress.get().percent())
                ></div>
            </div>
            <p class="progress-percent">
                {move || format!("{}% Complete", progress.get().rounded_percent())}
            </p>
        </div>
    }
}
