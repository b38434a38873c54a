use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::session::OrderItemDto,
    server::view::{render, PageContext},
};

pub const CART_TITLE: &str = "Pet Supply Store Cart";

/// Renders the order items of the session.
pub fn cart_page(context: PageContext, items: Vec<OrderItemDto>) -> Html<String> {
    let total = items
        .iter()
        .try_fold(0i128, |total, item| total.checked_add(line_total(item)))
        .map_or_else(|| "n/a".to_string(), format_cents);

    let content = if items.is_empty() {
        rsx! {
            h2 { "Shopping Cart" }
            p { class: "empty-cart", "Your cart is empty." }
        }
    } else {
        rsx! {
            h2 { "Shopping Cart" }
            table { class: "cart",
                thead {
                    tr {
                        th { "Product" }
                        th { "Quantity" }
                        th { "Unit Price" }
                        th { "Total Price" }
                    }
                }
                tbody {
                    {items.into_iter().map(|item| {
                        let product_id = item.product_id;
                        let quantity = item.quantity;
                        let unit_price = format_cents(item.unit_price_in_cents.into());
                        let line_price = format_cents(line_total(&item));
                        rsx! {
                            tr { key: "{product_id}",
                                td { "{product_id}" }
                                td { "{quantity}" }
                                td { "{unit_price}" }
                                td { "{line_price}" }
                            }
                        }
                    })}
                }
                tfoot {
                    tr {
                        td { colspan: "3", "Total" }
                        td { id: "cart-total", "{total}" }
                    }
                }
            }
        }
    };

    render(CART_TITLE, context, content)
}

/// Price of an item line. Cannot overflow as both factors fit in 64 bits.
fn line_total(item: &OrderItemDto) -> i128 {
    i128::from(item.quantity) * i128::from(item.unit_price_in_cents)
}

fn format_cents(cents: i128) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}
