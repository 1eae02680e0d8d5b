use leptos::prelude::*;

/// 仅展示说明文字的页面 (图像分析、排餐与统计不在本应用范围内)
#[component]
pub fn InfoPage(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            <h1 class="text-4xl font-bold mb-8">{title}</h1>
            <div class="card bg-base-100 shadow-md">
                <div class="card-body">
                    <p class="text-lg text-base-content/80">{description}</p>
                </div>
            </div>
        </div>
    }
}
