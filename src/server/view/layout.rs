use dioxus::prelude::*;

use crate::server::view::PageContext;

/// Body frame shared by every page: header with login and cart links, category side bar and the
/// pending status message.
#[component]
pub fn Layout(context: PageContext, children: Element) -> Element {
    let home = context.link("/");
    let login = context.link("/login");
    let cart = context.link("/cart");
    let login_label = if context.logged_in { "Sign out" } else { "Sign in" };

    rsx! {
        header { class: "navbar",
            a { class: "brand", href: "{home}", "Pet Supply Store" }
            nav {
                a { id: "login", href: "{login}", "{login_label}" }
                a { id: "cart", href: "{cart}",
                    "Cart"
                    {context.product_count.map(|count| rsx! {
                        span { class: "badge", "{count}" }
                    })}
                }
            }
        }
        div { class: "container",
            aside { class: "categories",
                h3 { "Categories" }
                ul {
                    {context.categories.iter().map(|category| {
                        let id = category.id;
                        let name = &category.name;
                        rsx! {
                            li { key: "{id}", "{name}" }
                        }
                    })}
                }
            }
            main {
                {context.message.as_ref().map(|message| rsx! {
                    div { class: "alert", role: "alert", "{message}" }
                })}
                {children}
            }
        }
    }
}
