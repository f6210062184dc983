use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth, department, participant, reservation, room, technician, user},
    error::{config::ConfigError, internal::InternalError, AppError},
    state::AppState,
};

/// Seconds between replenished login attempts for each client IP.
const LOGIN_REPLENISH_SECONDS: u64 = 2;
/// Login attempts a client IP may burst before being throttled.
const LOGIN_BURST_SIZE: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    info(title = "Room Reservations API"),
    paths(
        auth::login,
        auth::refresh,
        auth::logout,
        auth::profile,
        reservation::create_reservation,
        reservation::get_reservations,
        reservation::get_pending_reservations,
        reservation::process_approval,
        reservation::get_reservation_history,
        reservation::get_reservation_by_number,
        reservation::update_reservation,
        reservation::cancel_reservation,
        reservation::get_approval_history,
        reservation::get_reservation_detail,
        reservation::get_attendance,
        participant::add_participant,
        participant::get_participants,
        participant::remove_participant,
        room::get_rooms,
        room::create_room,
        room::get_available_rooms,
        room::validate_availability,
        room::get_daily_availability,
        room::get_rooms_with_history,
        room::get_room,
        room::get_room_usage_history,
        room::get_event_detail,
        room::get_room_equipment,
        room::update_equipment,
        room::get_inventory,
        room::update_inventory,
        user::create_user,
        user::get_users,
        department::create_department,
        department::get_departments,
        technician::create_technician,
        technician::get_technicians,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Login, token refresh and profile"),
        (name = "reservation", description = "Room reservations and their approval workflow"),
        (name = "participant", description = "Event participants"),
        (name = "room", description = "Rooms, availability, equipment and inventory"),
        (name = "user", description = "User administration"),
        (name = "department", description = "Departments"),
        (name = "technician", description = "Technicians responsible for rooms"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` JWT scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// Builds the application router.
///
/// Mounts every API endpoint, the Swagger UI at `/api/docs`, a per-IP rate limit on
/// login, CORS for the configured frontend origin and request tracing.
///
/// The login rate limiter keys on the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Returns
/// - `Ok(Router)` - Router awaiting application state
/// - `Err(AppError)` - Invalid CORS origin or rate limiter settings
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(LOGIN_REPLENISH_SECONDS)
        .burst_size(LOGIN_BURST_SIZE)
        .finish()
        .ok_or_else(|| {
            InternalError::RateLimiterConfig(
                "replenish period and burst size must be non-zero".to_string(),
            )
        })?;

    let login = Router::new()
        .route("/api/auth/login", post(auth::login))
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    Ok(Router::new()
        .merge(login)
        .merge(api_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&config.cors_origin)?)
        .layer(TraceLayer::new_for_http()))
}

/// Every endpoint except login.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/profile", get(auth::profile))
        .route(
            "/api/reservations",
            post(reservation::create_reservation).get(reservation::get_reservations),
        )
        .route(
            "/api/reservations/pending",
            get(reservation::get_pending_reservations),
        )
        .route(
            "/api/reservations/approval",
            post(reservation::process_approval),
        )
        .route(
            "/api/reservations/history/{user_id}",
            get(reservation::get_reservation_history),
        )
        .route(
            "/api/reservations/number/{number}",
            get(reservation::get_reservation_by_number).patch(reservation::update_reservation),
        )
        .route(
            "/api/reservations/number/{number}/cancel",
            post(reservation::cancel_reservation),
        )
        .route(
            "/api/reservations/number/{number}/history",
            get(reservation::get_approval_history),
        )
        .route(
            "/api/reservations/{id}",
            get(reservation::get_reservation_detail),
        )
        .route(
            "/api/reservations/{id}/attendance",
            get(reservation::get_attendance),
        )
        .route(
            "/api/reservations/{id}/participants",
            get(participant::get_participants),
        )
        .route("/api/participants", post(participant::add_participant))
        .route(
            "/api/participants/{id}",
            delete(participant::remove_participant),
        )
        .route("/api/rooms", get(room::get_rooms).post(room::create_room))
        .route("/api/rooms/available", post(room::get_available_rooms))
        .route(
            "/api/rooms/validate-availability",
            post(room::validate_availability),
        )
        .route(
            "/api/rooms/daily-availability",
            get(room::get_daily_availability),
        )
        .route("/api/rooms/history", get(room::get_rooms_with_history))
        .route("/api/rooms/{id}", get(room::get_room))
        .route("/api/rooms/{id}/history", get(room::get_room_usage_history))
        .route("/api/rooms/{id}/equipment", get(room::get_room_equipment))
        .route(
            "/api/rooms/{id}/inventory",
            get(room::get_inventory).put(room::update_inventory),
        )
        .route("/api/rooms/equipment/{id}", put(room::update_equipment))
        .route(
            "/api/rooms/events/{reservation_id}",
            get(room::get_event_detail),
        )
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/departments",
            get(department::get_departments).post(department::create_department),
        )
        .route(
            "/api/technicians",
            get(technician::get_technicians).post(technician::create_technician),
        )
}

fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidValue {
            name: "CORS_ORIGIN".to_string(),
            reason: format!("'{}' is not a valid header value", origin),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
