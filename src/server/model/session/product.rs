use axum_extra::extract::CookieJar;

/// Name of the cookie holding the number of products in the cart.
pub const PRODUCT_COUNT_COOKIE: &str = "petsupplystorenumberProductsCookie";

pub struct ProductCountCookie;

impl ProductCountCookie {
    /// Number of products in the cart, `None` if the cookie is absent or not a number.
    pub fn get(jar: &CookieJar) -> Option<u32> {
        jar.get(PRODUCT_COUNT_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}
