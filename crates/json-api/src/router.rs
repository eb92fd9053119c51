//! App Router

use salvo::Router;

use crate::{
    assignments, auth, carts, categories, contact, orders, products, translations, uploads, users,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::authenticate)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("categories").get(categories::index::handler))
        .push(
            Router::with_path("carts")
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(
                            Router::with_path("items")
                                .post(carts::add_item::handler)
                                .delete(carts::clear::handler)
                                .push(
                                    Router::with_path("{line}")
                                        .put(carts::set_quantity::handler)
                                        .delete(carts::remove_item::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .get(orders::index::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
        .push(Router::with_path("contact").post(contact::create::handler))
        .push(
            Router::with_path("admin")
                .hoop(auth::middleware::require_admin)
                .push(
                    Router::with_path("products")
                        .get(products::admin_index::handler)
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(products::update::handler)
                                .delete(products::delete::handler)
                                .push(
                                    Router::with_path("assignments")
                                        .get(assignments::get::handler)
                                        .put(assignments::replace::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("categories")
                        .get(categories::admin_index::handler)
                        .post(categories::create::handler)
                        .push(
                            Router::with_path("{category}")
                                .put(categories::update::handler)
                                .delete(categories::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::admin_index::handler)
                        .push(
                            Router::with_path("{order}/status")
                                .put(orders::update_status::handler),
                        ),
                )
                .push(Router::with_path("users").get(users::index::handler))
                .push(Router::with_path("translations").post(translations::create::handler))
                .push(
                    Router::with_path("uploads")
                        .push(Router::with_path("images").post(uploads::image::handler))
                        .push(Router::with_path("documents").post(uploads::document::handler)),
                ),
        )
}
