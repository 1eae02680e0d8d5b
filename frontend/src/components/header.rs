//! 页头：品牌、按角色生成的导航菜单、问候语与注销

use leptos::prelude::*;
use zpire_shared::{NavEntry, build_nav};

use crate::components::icons::{Close, LogOut, MenuBars, NavIcon};
use crate::session::use_session;
use crate::web::router::{Link, use_router};

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let (mobile_open, set_mobile_open) = signal(false);

    // 菜单与高亮都来自领域层，这里只负责渲染
    let nav = Memo::new(move |_| {
        let role = session.view.get().role;
        router.location().with(|loc| build_nav(role, loc))
    });

    let on_logout = move |_| {
        set_mobile_open.set(false);
        session.logout();
    };

    view! {
        <header class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1">
                <Link to="/" class="btn btn-ghost text-2xl">
                    <span class="font-bold text-primary">"ZPIRE"</span>
                    <span class="font-medium">"Nutrition"</span>
                </Link>
            </div>

            // 桌面端导航
            <nav class="hidden md:flex flex-none items-center gap-2">
                <For
                    each=move || nav.get()
                    key=|entry| (entry.item.target, entry.active)
                    children=move |entry: NavEntry| {
                        view! { <NavLink entry=entry on_navigate=move || set_mobile_open.set(false) /> }
                    }
                />
                <Show when=move || session.is_logged_in()>
                    <span class="badge badge-neutral">
                        {move || session.greeting().unwrap_or_default()}
                    </span>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut class="h-4 w-4" />
                        "Log Out"
                    </button>
                </Show>
            </nav>

            // 移动端菜单按钮
            <button
                type="button"
                class="md:hidden btn btn-ghost btn-square"
                on:click=move |_| set_mobile_open.update(|open| *open = !*open)
            >
                {move || if mobile_open.get() {
                    view! { <Close class="h-7 w-7" /> }.into_any()
                } else {
                    view! { <MenuBars class="h-7 w-7" /> }.into_any()
                }}
            </button>
        </header>

        // 移动端导航
        <Show when=move || mobile_open.get()>
            <nav class="md:hidden menu bg-base-100 border-t w-full">
                <For
                    each=move || nav.get()
                    key=|entry| (entry.item.target, entry.active)
                    children=move |entry: NavEntry| {
                        view! { <NavLink entry=entry on_navigate=move || set_mobile_open.set(false) /> }
                    }
                />
                <Show when=move || session.is_logged_in()>
                    <button on:click=on_logout class="btn btn-ghost justify-start text-error gap-2">
                        <LogOut class="h-5 w-5" />
                        "Log Out"
                    </button>
                </Show>
            </nav>
        </Show>
    }
}

#[component]
fn NavLink(entry: NavEntry, on_navigate: impl Fn() + 'static) -> impl IntoView {
    let class = if entry.active {
        "btn btn-ghost text-lg text-primary gap-2"
    } else {
        "btn btn-ghost text-lg text-base-content/70 gap-2"
    };

    view! {
        <div on:click=move |_| on_navigate()>
            <Link to=entry.item.target class=class.to_string()>
                <NavIcon tag=entry.item.icon />
                {entry.item.label}
            </Link>
        </div>
    }
}
