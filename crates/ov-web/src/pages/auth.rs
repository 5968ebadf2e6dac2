use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use ov_routes::Page;

use crate::components::{NavLink, PageHeader};
use crate::notify::use_notifications;

/// (label, name, input type)
type Field = (&'static str, &'static str, &'static str);

/// Form shell shared by the account pages. Submissions go to the account
/// service, which this build does not talk to, so the user is told so.
#[component]
fn AuthForm(#[prop(into)] submit_label: String, fields: Vec<Field>) -> impl IntoView {
    let notifications = use_notifications();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        notifications
            .toaster
            .error("Not available", "Account services are not connected in this build.");
    };

    view! {
        <form class="space-y-3" on:submit=on_submit>
            {fields
                .into_iter()
                .map(|(label, name, kind)| {
                    view! {
                        <label class="block">
                            <div class="text-sm">{label}</div>
                            <input class="w-full border border-[var(--rule)] px-2 py-1" type=kind name=name required=true />
                        </label>
                    }
                })
                .collect_view()}
            <button
                type="submit"
                class="px-3 py-1 border border-dashed border-[var(--rule)] hover:bg-[var(--rule)] transition-colors cursor-pointer"
            >
                {submit_label}
            </button>
        </form>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <main class="max-w-[60ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Sign in" />
            <AuthForm submit_label="Sign in" fields=vec![("Email", "email", "email"), ("Password", "password", "password")] />
            <div class="mt-4 space-y-1 text-sm">
                <div><NavLink page=Page::ForgotPassword>"forgot your password?"</NavLink></div>
                <div><NavLink page=Page::Register>"no account yet? register"</NavLink></div>
            </div>
        </main>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <main class="max-w-[60ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Create account" />
            <AuthForm
                submit_label="Register"
                fields=vec![
                    ("Full name", "name", "text"),
                    ("Email", "email", "email"),
                    ("Password", "password", "password"),
                ]
            />
            <div class="mt-4 text-sm">
                <NavLink page=Page::Login>"already registered? sign in"</NavLink>
            </div>
        </main>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <main class="max-w-[60ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Forgot password" subtitle="We will email you a reset link." />
            <AuthForm submit_label="Send reset link" fields=vec![("Email", "email", "email")] />
            <div class="mt-4 text-sm">
                <NavLink page=Page::Login>"back to sign in"</NavLink>
            </div>
        </main>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <main class="max-w-[60ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Reset password" />
            <AuthForm
                submit_label="Update password"
                fields=vec![("New password", "password", "password"), ("Confirm password", "confirm", "password")]
            />
        </main>
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! {
        <main class="max-w-[60ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Admin sign in" subtitle="Election administrators only." />
            <AuthForm submit_label="Sign in" fields=vec![("Email", "email", "email"), ("Password", "password", "password")] />
        </main>
    }
}
