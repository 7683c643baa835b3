use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use rps_predict_core::model::game_move::Move;
use rps_predict_core::model::predictor::Predictor;

/// Struct representing query parameters for the `/v1/track` endpoint
#[derive(Deserialize)]
struct TrackParams {
	name: String,
	windows: Option<String> // comma-separated window sizes, defaults to "4"
}

/// Struct representing query parameters for the `/v1/observe` endpoint
#[derive(Deserialize)]
struct ObserveParams {
	name: String,
	played: String // single move character: r, p or s
}

#[derive(Deserialize)]
struct OpponentQuery {
	name: String
}

struct SharedData {
	predictor: Predictor
}

impl TrackParams {
	/// Parses the comma-separated window sizes, defaulting to a single
	/// window of four moves.
	fn window_sizes(&self) -> Result<Vec<usize>, String> {
		let raw = match &self.windows {
			Some(s) if !s.trim().is_empty() => s.trim(),
			_ => return Ok(vec![4]),
		};

		let mut sizes = Vec::new();
		for part in raw.split(',') {
			let part = part.trim();
			if part.is_empty() {
				continue;
			}
			match part.parse::<usize>() {
				Ok(n) => sizes.push(n),
				Err(_) => return Err(format!("Window sizes must be integers, got: {}", part)),
			}
		}

		if sizes.is_empty() {
			return Err("No window sizes given".to_owned());
		}
		Ok(sizes)
	}
}

impl ObserveParams {
	/// Parses the played move from its single-character encoding.
	fn played_move(&self) -> Result<Move, String> {
		let mut chars = self.played.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Move::from_char(c),
			_ => Err(format!("Expected a single move character, got: {}", self.played)),
		}
	}
}

/// HTTP PUT endpoint `/v1/track`
///
/// Starts tracking a new opponent with the requested window sizes.
#[put("/v1/track")]
async fn put_track(data: web::Data<Mutex<SharedData>>, query: web::Query<TrackParams>) -> impl Responder {
	let window_sizes = match query.window_sizes() {
		Ok(sizes) => sizes,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Predictor lock failed"),
	};

	match shared_data.predictor.track(&query.name, &window_sizes) {
		Ok(_) => {
			log::info!("Tracking opponent {} with windows {:?}", query.name, window_sizes);
			HttpResponse::Ok().body("Opponent tracked successfully")
		}
		Err(e) => HttpResponse::BadRequest().body(e)
	}
}

/// HTTP PUT endpoint `/v1/observe`
///
/// Records one played move for a tracked opponent.
#[put("/v1/observe")]
async fn put_observe(data: web::Data<Mutex<SharedData>>, query: web::Query<ObserveParams>) -> impl Responder {
	let mv = match query.played_move() {
		Ok(mv) => mv,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Predictor lock failed"),
	};

	match shared_data.predictor.observe(&query.name, mv) {
		Ok(_) => HttpResponse::Ok().body("Move recorded"),
		Err(e) => HttpResponse::NotFound().body(e)
	}
}

/// HTTP GET endpoint `/v1/predict`
///
/// Returns the predicted next move of a tracked opponent as a single
/// character.
#[get("/v1/predict")]
async fn get_predict(data: web::Data<Mutex<SharedData>>, query: web::Query<OpponentQuery>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Predictor lock failed"),
	};

	match shared_data.predictor.predict(&query.name) {
		Ok(mv) => HttpResponse::Ok().body(mv.as_char().to_string()),
		Err(e) => HttpResponse::NotFound().body(e)
	}
}

/// HTTP GET endpoint `/v1/opponents`
///
/// Lists the names of all tracked opponents.
#[get("/v1/opponents")]
async fn get_opponents(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Predictor lock failed"),
	};
	HttpResponse::Ok().body(shared_data.predictor.opponents().join("\n"))
}

/// HTTP GET endpoint `/v1/stats`
///
/// Returns the full frequency tables of one opponent's model as JSON.
#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>, query: web::Query<OpponentQuery>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Predictor lock failed"),
	};

	match shared_data.predictor.model(&query.name) {
		Some(model) => HttpResponse::Ok().json(model),
		None => HttpResponse::NotFound().body(format!("Opponent {} not tracked", query.name))
	}
}

/// Main entry point for the server.
///
/// Creates an empty predictor, wraps it in a `Mutex` for thread safety,
/// and starts an Actix-web HTTP server exposing the tracking endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Opponents are tracked on demand via `/v1/track`; nothing is loaded at
///   startup and nothing survives a restart.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		predictor: Predictor::new(),
	};
	let shared_predictor = web::Data::new(Mutex::new(shared_data));

	log::info!("Listening on 127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_predictor.clone())
			.service(put_track)
			.service(put_observe)
			.service(get_predict)
			.service(get_opponents)
			.service(get_stats)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
