use axum::response::Html;
use dioxus::prelude::*;

use crate::server::view::{render, PageContext};

pub const LOGIN_TITLE: &str = "Pet Supply Store Login";

/// Renders the login form, or the logout button for a logged in visitor.
///
/// `referer` is posted back with the form so a login started from the cart returns there.
pub fn login_page(context: PageContext, referer: &str) -> Html<String> {
    let action = context.link("/loginAction");
    let referer = referer.to_string();

    let content = if context.logged_in {
        rsx! {
            h2 { "Logout" }
            form { id: "logout-form", action: "{action}", method: "POST",
                button { r#type: "submit", name: "logout", value: "logout", "Sign out" }
            }
        }
    } else {
        rsx! {
            h2 { "Login" }
            p { "Please enter your username and password." }
            form { id: "login-form", action: "{action}", method: "POST",
                label { r#for: "username", "Username" }
                input { id: "username", name: "username", r#type: "text", required: true }
                label { r#for: "password", "Password" }
                input { id: "password", name: "password", r#type: "password", required: true }
                input { name: "referer", r#type: "hidden", value: "{referer}" }
                button { r#type: "submit", name: "signin", value: "signin", "Sign in" }
            }
        }
    };

    render(LOGIN_TITLE, context, content)
}
