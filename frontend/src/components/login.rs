use leptos::prelude::*;
use zpire_shared::forms::login::{EMAIL, PASSWORD, USER_TYPE};
use zpire_shared::forms::{LoginForm, UserType};
use zpire_shared::wizard::FormWizard;
use zpire_shared::{SubmitOutcome, log_info};

use super::form_state::FormState;
use crate::web::router::{Link, use_navigate, use_router};

/// 模拟登录：不做真实认证，按用户类型跳转到对应落地页，
/// 会话角色随之由地址推断得出。
#[component]
pub fn LoginPage() -> impl IntoView {
    let router = use_router();
    let navigate = use_navigate();

    // ?userType=carehome 预选养老院
    let form = FormState::<LoginForm>::from_wizard(FormWizard::with_draft(
        LoginForm::draft_for_query(&router.query()),
    ));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut target = None;
        let outcome = form.submit(|snapshot| {
            let user_type = LoginForm::user_type(&snapshot.draft);
            log_info!("[Login] Simulated login as {}.", user_type.as_str());
            target = Some(user_type.landing_path());
        });
        if let (Some(SubmitOutcome::Saved), Some(target)) = (outcome, target) {
            navigate(target);
        }
    };

    let user_type_button = move |user_type: UserType, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if form.text(USER_TYPE) == user_type.as_str() {
                        "btn btn-primary flex-1"
                    } else {
                        "btn btn-outline flex-1"
                    }
                }
                on:click=move |_| form.set_text(USER_TYPE, user_type.as_str().to_string())
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <Link to="/" class="link link-primary self-start">
                    "← Back to Home"
                </Link>
                <h1 class="text-3xl font-bold">"Log In"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {form.error_alert()}

                        <div class="flex gap-2">
                            {user_type_button(UserType::Individual, "Individual")}
                            {user_type_button(UserType::CareHome, "Care Home")}
                        </div>

                        {form.text_input(EMAIL, "Email", "email")}
                        {form.text_input(PASSWORD, "Password", "password")}

                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary">"Log In"</button>
                        </div>
                        <p class="text-center text-sm">
                            "Don't have an account? "
                            <Link to="/signup" class="link link-primary">"Sign up"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
