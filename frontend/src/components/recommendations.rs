use leptos::prelude::*;
use zpire_shared::fixtures::{Period, Priority, StaticFixtures};

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let (period, set_period) = signal(Period::Daily);

    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            <h1 class="text-4xl font-bold mb-8">"My Recommendations"</h1>

            <div role="tablist" class="tabs tabs-boxed mb-6">
                {Period::ALL
                    .iter()
                    .map(|p| {
                        let p = *p;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || if period.get() == p { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_period.set(p)
                            >
                                {p.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="space-y-6">
                {move || {
                    StaticFixtures
                        .recommendations(period.get())
                        .map(|rec| {
                            let badge = match rec.priority {
                                Priority::High => "badge badge-error",
                                Priority::Medium => "badge badge-warning",
                                Priority::Low => "badge badge-info",
                            };
                            view! {
                                <div class="card bg-base-100 shadow-md">
                                    <div class="card-body">
                                        <div class="flex justify-between items-start">
                                            <h2 class="card-title text-2xl">{rec.title}</h2>
                                            <span class=badge>{format!("{:?} priority", rec.priority)}</span>
                                        </div>
                                        <p class="text-lg text-base-content/80">{rec.description}</p>
                                        <ul class="list-disc list-inside space-y-1 mt-2">
                                            {rec
                                                .suggestions
                                                .iter()
                                                .map(|s| view! { <li>{*s}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
