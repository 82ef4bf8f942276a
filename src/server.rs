use std::convert::Infallible;

use log::{error, info, warn};
use serde::Serialize;
use warp::{
    body::BodyDeserializeError,
    http::{Method, StatusCode},
    reject::{
        LengthRequired,
        MethodNotAllowed,
        PayloadTooLarge,
        Reject,
        UnsupportedMediaType,
    },
    Filter,
    Rejection,
    Reply,
};

use crate::{
    fightsnake::{
        models::{GameState, Movement, Status},
        types::{APIVersion, Head, Tail},
    },
    strategies::{Strategy, Wallflower},
};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const SERVER: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const COLOR: &str = "#0066ff";
pub const HEAD: Head = Head::Beluga;
pub const TAIL: Tail = Tail::Bolt;

#[derive(Debug)]
struct InvalidGameState(String);
impl Reject for InvalidGameState {}

#[derive(Serialize)]
struct ErrorMessage {
    message: String,
}

#[must_use]
pub fn status() -> Status {
    Status {
        apiversion: APIVersion::One,
        author:     AUTHOR.to_owned(),
        color:      COLOR.to_owned(),
        head:       HEAD,
        tail:       TAIL,
        version:    VERSION.to_owned(),
    }
}

/// The whole Battlesnake API: `GET /`, and `POST` to `/start`, `/move` and
/// `/end`. Every request gets a reply, errors included.
pub fn routes(
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let healthz = warp::get()
        .and(warp::path::end())
        .map(|| warp::reply::json(&status()));

    let start = warp::post()
        .and(warp::path("start"))
        .and(warp::path::end())
        .and(warp::body::json())
        .map(|game_state: GameState| {
            info!("{} START", game_state.game.id);
            "ok"
        });

    let do_move = warp::post()
        .and(warp::path("move"))
        .and(warp::path::end())
        .and(warp::body::json())
        .and_then(|game_state: GameState| async move {
            Wallflower
                .get_movement(game_state)
                .map(|movement| {
                    warp::reply::json(&Movement {
                        movement,
                        shout: None,
                    })
                })
                .map_err(|e| {
                    error!("failed to get move: {e:#}");
                    warp::reject::custom(InvalidGameState(format!("{e:#}")))
                })
        });

    let end = warp::post()
        .and(warp::path("end"))
        .and(warp::path::end())
        .and(warp::body::json())
        .map(|game_state: GameState| {
            info!("{} END", game_state.game.id);
            "ok"
        });

    healthz
        .or(start)
        .or(do_move)
        .or(end)
        .with(cors)
        .recover(handle_rejection)
        .with(warp::reply::with::header("server", SERVER))
        .with(logging)
}

fn describe(err: &Rejection) -> (StatusCode, String) {
    if let Some(InvalidGameState(message)) = err.find() {
        return (StatusCode::BAD_REQUEST, message.clone());
    }
    if let Some(e) = err.find::<BodyDeserializeError>() {
        return (StatusCode::BAD_REQUEST, e.to_string());
    }
    if let Some(e) = err.find::<UnsupportedMediaType>() {
        return (StatusCode::UNSUPPORTED_MEDIA_TYPE, e.to_string());
    }
    if let Some(e) = err.find::<PayloadTooLarge>() {
        return (StatusCode::PAYLOAD_TOO_LARGE, e.to_string());
    }
    if let Some(e) = err.find::<LengthRequired>() {
        return (StatusCode::LENGTH_REQUIRED, e.to_string());
    }
    if let Some(e) = err.find::<MethodNotAllowed>() {
        return (StatusCode::METHOD_NOT_ALLOWED, e.to_string());
    }
    if err.is_not_found() {
        return (StatusCode::NOT_FOUND, "not found".to_owned());
    }

    warn!("unhandled rejection: {err:?}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_owned(),
    )
}

/// Turns every rejection into a JSON error reply, so nothing skips the
/// `server` header.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = describe(&err);
    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorMessage { message }),
        status,
    ))
}
