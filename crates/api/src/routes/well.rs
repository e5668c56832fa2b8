use axum::routing::get;
use axum::Router;

use crate::handlers::well;
use crate::state::AppState;

/// Well page routes, mounted at the root.
///
/// ```text
/// GET         /                  -> index
/// GET         /wells             -> list
/// GET, POST   /create            -> create_form, create
/// GET         /wells/{id}        -> view
/// GET, POST   /wells/{id}/edit   -> edit_form, update
/// GET, POST   /delete/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(well::index))
        .route("/wells", get(well::list))
        .route("/create", get(well::create_form).post(well::create))
        .route("/wells/{id}", get(well::view))
        .route("/wells/{id}/edit", get(well::edit_form).post(well::update))
        .route("/delete/{id}", get(well::delete).post(well::delete))
}
