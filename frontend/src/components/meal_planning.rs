//! 养老院膳食计划：按天浏览，并按餐次筛选

use leptos::prelude::*;
use zpire_shared::chrono::NaiveDate;
use zpire_shared::fixtures::{MealType, PlannedMeal, StaticFixtures};
use zpire_shared::{Clock, IconTag, log_warn};

use crate::components::icons::{ChevronLeft, ChevronRight, NavIcon};
use crate::web::BrowserClock;

#[component]
pub fn CareHomeMealPlanningPage() -> impl IntoView {
    let (current_date, set_current_date) = signal(BrowserClock.today());
    // None 表示全部餐次
    let (meal_type, set_meal_type) = signal(Option::<MealType>::None);

    let meals = move || StaticFixtures.meals_for(current_date.get(), meal_type.get());

    let shift_day = move |forward: bool| {
        let date = current_date.get_untracked();
        let next = if forward { date.succ_opt() } else { date.pred_opt() };
        match next {
            Some(next) => set_current_date.set(next),
            None => log_warn!("[MealPlanning] Date out of range: {}", date),
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-5xl">
            <h1 class="text-4xl font-bold mb-8">"Care Home Meal Planning"</h1>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex flex-col md:flex-row justify-between items-center gap-4 mb-6">
                        <div class="flex items-center gap-2">
                            <button type="button" class="btn btn-ghost btn-circle" on:click=move |_| shift_day(false)>
                                <ChevronLeft class="h-6 w-6" />
                            </button>
                            <div class="flex items-center gap-2">
                                <NavIcon tag=IconTag::Calendar class="h-6 w-6 text-primary" />
                                <span class="text-xl font-medium">
                                    {move || display_date(current_date.get())}
                                </span>
                            </div>
                            <button type="button" class="btn btn-ghost btn-circle" on:click=move |_| shift_day(true)>
                                <ChevronRight class="h-6 w-6" />
                            </button>
                        </div>

                        <label class="flex items-center gap-2">
                            <span class="label-text">"Filter by:"</span>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| set_meal_type.set(MealType::parse(&event_target_value(&ev)))
                                prop:value=move || meal_type.get().map(|t| t.as_str()).unwrap_or("all")
                            >
                                <option value="all">"All Meals"</option>
                                {MealType::ALL
                                    .iter()
                                    .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>

                    <Show
                        when=move || !meals().is_empty()
                        fallback=|| view! {
                            <div class="text-center py-12 bg-base-200 rounded-lg">
                                <h3 class="text-xl font-medium mb-2">"No meals planned for this day"</h3>
                                <p class="text-base-content/60">"Add a meal to start planning the menu for this day."</p>
                            </div>
                        }
                    >
                        <div class="space-y-6">
                            <For
                                each=meals
                                key=|meal| meal.id
                                children=|meal: &'static PlannedMeal| view! { <MealCard meal=meal /> }
                            />
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// 例如 "Wednesday, November 12, 2025"
fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[component]
fn MealCard(meal: &'static PlannedMeal) -> impl IntoView {
    view! {
        <div class="border border-base-300 rounded-lg p-5">
            <span class="font-medium text-lg text-primary">{meal.meal_type.label()}</span>
            <h3 class="text-xl font-semibold my-2">{meal.name}</h3>
            <p class="text-base-content/70 mb-3">{meal.description}</p>
            <p class="mb-3">
                <span class="font-medium">"Nutrition: "</span>
                {meal.nutrition_info}
            </p>
            <div class="flex flex-wrap gap-2">
                {meal
                    .dietary_tags
                    .iter()
                    .map(|tag| view! { <span class="badge badge-primary badge-outline">{*tag}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
