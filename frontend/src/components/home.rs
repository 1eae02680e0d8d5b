use leptos::prelude::*;
use zpire_shared::{IconTag, Role};

use super::icons::NavIcon;
use crate::session::use_session;
use crate::web::router::Link;

/// 落地页：内容随会话角色变化
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-4xl font-bold text-center mb-8">"ZPIRE Nutrition"</h1>
            {move || match session.role() {
                Role::Anonymous => view! { <Welcome /> }.into_any(),
                Role::Individual => view! {
                    <h2 class="text-2xl font-semibold mb-6 text-center">"Individual User Dashboard"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-4xl mx-auto">
                        <NavCard to="/profile" icon=IconTag::User label="My Profile"
                            description="View and update your health information" />
                        <NavCard to="/food-analysis" icon=IconTag::Camera label="Analyze Food"
                            description="Take a photo of your meal for analysis" />
                        <NavCard to="/recommendations" icon=IconTag::Utensils label="My Recommendations"
                            description="View your personalized nutrition advice" />
                    </div>
                }
                .into_any(),
                Role::CareHome => view! {
                    <h2 class="text-2xl font-semibold mb-6 text-center">"Care Home Dashboard"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-3xl mx-auto">
                        <NavCard to="/care-home" icon=IconTag::Building label="Resident Management"
                            description="Manage and monitor residents' nutrition" />
                        <NavCard to="/care-home/meal-planning" icon=IconTag::Calendar label="Meal Planning"
                            description="Plan and track meals for residents" />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn Welcome() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto text-center">
            <h2 class="text-2xl font-semibold mb-6">
                "Welcome! How would you like to use ZPIRE Nutrition?"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mt-8">
                <NavCard to="/login" icon=IconTag::User label="Individual User"
                    description="For elderly individuals or their caretakers" />
                <NavCard to="/login?userType=carehome" icon=IconTag::Building label="Care Home / Hospital"
                    description="For institutions managing multiple residents" />
            </div>
            <p class="mt-8">
                "New here? "
                <Link to="/signup" class="link link-primary">"Create an account"</Link>
            </p>
        </div>
    }
}

#[component]
fn NavCard(
    to: &'static str,
    icon: IconTag,
    label: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Link to=to class="card bg-base-100 shadow-md hover:shadow-lg transition-shadow">
            <div class="card-body items-center text-center">
                <div class="text-primary mb-4">
                    <NavIcon tag=icon class="h-10 w-10" />
                </div>
                <h2 class="card-title text-2xl">{label}</h2>
                <p class="text-base-content/70">{description}</p>
            </div>
        </Link>
    }
}
