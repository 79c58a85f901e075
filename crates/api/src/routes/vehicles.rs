use axum::routing::get;
use axum::Router;

use crate::handlers::vehicles;
use crate::state::AppState;

/// Public power-checker routes mounted at `/vehicles`.
///
/// ```text
/// GET /lookup                                             -> lookup
/// GET /{type}/brands                                      -> list_brands
/// GET /{type}/{brand}/models                              -> list_models
/// GET /{type}/{brand}/{model}/generations                 -> list_generations
/// GET /{type}/{brand}/{model}/{generation}/engines        -> list_engines
/// GET /{type}/{brand}/{model}/{generation}/{engine}/power -> get_power
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lookup", get(vehicles::lookup))
        .route("/{vehicle_type}/brands", get(vehicles::list_brands))
        .route("/{vehicle_type}/{brand}/models", get(vehicles::list_models))
        .route(
            "/{vehicle_type}/{brand}/{model}/generations",
            get(vehicles::list_generations),
        )
        .route(
            "/{vehicle_type}/{brand}/{model}/{generation}/engines",
            get(vehicles::list_engines),
        )
        .route(
            "/{vehicle_type}/{brand}/{model}/{generation}/{engine}/power",
            get(vehicles::get_power),
        )
}

/// Admin routes mounted at `/admin/vehicles`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(vehicles::admin_list_vehicles).post(vehicles::create_vehicle),
        )
        .route(
            "/{id}",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
}
