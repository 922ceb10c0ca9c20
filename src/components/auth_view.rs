//! Auth View Component
//!
//! Login/register toggle shown while no valid session exists. Submit
//! buttons enter a disabled loading state while the request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::use_api;

const MIN_PASSWORD_LEN: usize = 6;

fn password_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthForm {
    Login,
    Register,
}

#[component]
pub fn AuthView() -> impl IntoView {
    let api = use_api();
    let (active_form, set_active_form) = signal(AuthForm::Login);

    // Login form state
    let (login_email, set_login_email) = signal(String::new());
    let (login_password, set_login_password) = signal(String::new());
    let (login_busy, set_login_busy) = signal(false);

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if login_busy.get() {
            return;
        }
        let email = login_email.get();
        let password = login_password.get();
        set_login_busy.set(true);
        spawn_local(async move {
            actions::login(api, &email, &password).await;
            set_login_busy.set(false);
        });
    };

    // Register form state
    let (reg_username, set_reg_username) = signal(String::new());
    let (reg_email, set_reg_email) = signal(String::new());
    let (reg_password, set_reg_password) = signal(String::new());
    let (reg_busy, set_reg_busy) = signal(false);

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if reg_busy.get() {
            return;
        }
        let password = reg_password.get();
        if !password_long_enough(&password) {
            api.notices
                .error("Password must be at least 6 characters long");
            return;
        }
        let username = reg_username.get();
        let email = reg_email.get();
        set_reg_busy.set(true);
        spawn_local(async move {
            actions::register(api, &username, &email, &password).await;
            set_reg_busy.set(false);
        });
    };

    let toggle_class = move |form: AuthForm| {
        if active_form.get() == form {
            "nav-btn active"
        } else {
            "nav-btn"
        }
    };

    view! {
        <div class="login-register">
            <div class="auth-toggle">
                <button
                    class=move || toggle_class(AuthForm::Login)
                    on:click=move |_| set_active_form.set(AuthForm::Login)
                >
                    "Login"
                </button>
                <button
                    class=move || toggle_class(AuthForm::Register)
                    on:click=move |_| set_active_form.set(AuthForm::Register)
                >
                    "Register"
                </button>
            </div>

            <Show when=move || active_form.get() == AuthForm::Login>
                <form class="auth-form" on:submit=on_login>
                    <input
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || login_email.get()
                        on:input=move |ev| set_login_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || login_password.get()
                        on:input=move |ev| set_login_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn" disabled=move || login_busy.get()>
                        {move || if login_busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </Show>

            <Show when=move || active_form.get() == AuthForm::Register>
                <form class="auth-form" on:submit=on_register>
                    <input
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || reg_username.get()
                        on:input=move |ev| set_reg_username.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || reg_email.get()
                        on:input=move |ev| set_reg_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || reg_password.get()
                        on:input=move |ev| set_reg_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn" disabled=move || reg_busy.get()>
                        {move || if reg_busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_minimum_length() {
        assert!(!password_long_enough(""));
        assert!(!password_long_enough("12345"));
        assert!(password_long_enough("123456"));
    }
}
