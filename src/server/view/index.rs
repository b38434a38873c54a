use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::category::CategoryDto,
    server::view::{render, PageContext},
};

pub const INDEX_TITLE: &str = "Pet Supply Store Home";

pub fn index_page(context: PageContext) -> Html<String> {
    let categories = context.categories.clone();

    render(
        INDEX_TITLE,
        context,
        rsx! {
            h2 { "Welcome to the Pet Supply Store" }
            div { class: "category-grid",
                {categories.into_iter().map(|category| {
                    let CategoryDto { id, name, description } = category;
                    rsx! {
                        section { key: "{id}", class: "category",
                            h4 { "{name}" }
                            p { "{description}" }
                        }
                    }
                })}
            }
        },
    )
}
