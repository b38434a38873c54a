//! HTTP handlers of both services.
//!
//! - `category` - JSON CRUD endpoints of the persistence service, documented with utoipa
//! - `login` - Login & logout form action of the web UI
//! - `page` - Server-rendered pages of the web UI
//!
//! All handlers return `Result<_, Error>`. Unreachable backends surface as
//! [`StoreError`](crate::server::error::store::StoreError) and are rendered as the timeout page
//! by its `IntoResponse` implementation, so handlers simply propagate them with `?`.

pub mod category;
pub mod login;
pub mod page;
pub mod util;
