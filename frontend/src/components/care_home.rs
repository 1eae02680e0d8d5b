use leptos::prelude::*;
use zpire_shared::fixtures::{Resident, StaticFixtures};

/// 养老院面板：住户列表与搜索
#[component]
pub fn CareHomePage() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let residents = move || search.with(|term| StaticFixtures.search_residents(term));
    let total = StaticFixtures.residents().len();

    view! {
        <div class="container mx-auto px-4 py-8 max-w-6xl space-y-8">
            <h1 class="text-4xl font-bold">"Care Home Dashboard"</h1>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Residents"</div>
                    <div class="stat-value text-primary">{total}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Need Attention"</div>
                    <div class="stat-value text-warning">
                        {StaticFixtures
                            .residents()
                            .iter()
                            .filter(|r| r.health_status == "Needs attention")
                            .count()}
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 p-6 pb-2">
                        <h3 class="card-title">"Residents"</h3>
                        <input
                            type="search"
                            placeholder="Search by name or dietary needs"
                            class="input input-bordered w-full md:w-80"
                            prop:value=search
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Room"</th>
                                    <th class="hidden md:table-cell">"Dietary Needs"</th>
                                    <th>"Status"</th>
                                    <th class="hidden md:table-cell">"Latest Meal"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || residents().is_empty()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            "No residents match your search."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=residents
                                    key=|r| r.id
                                    children=|resident: &'static Resident| view! { <ResidentRow resident=resident /> }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ResidentRow(resident: &'static Resident) -> impl IntoView {
    let status_class = match resident.health_status {
        "Needs attention" => "badge badge-warning",
        "Good" => "badge badge-success",
        _ => "badge badge-ghost",
    };
    let latest = resident
        .recent_meals
        .first()
        .map(|m| format!("{} ({})", m.quality, m.concerns))
        .unwrap_or_default();

    view! {
        <tr>
            <td>
                <div class="font-bold">{resident.name}</div>
                <div class="text-sm opacity-50">{format!("Age {}", resident.age)}</div>
            </td>
            <td>{resident.room}</td>
            <td class="hidden md:table-cell">{resident.dietary_needs}</td>
            <td><span class=status_class>{resident.health_status}</span></td>
            <td class="hidden md:table-cell">{latest}</td>
        </tr>
    }
}
