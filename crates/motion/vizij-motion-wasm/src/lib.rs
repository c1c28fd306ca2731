//! wasm-bindgen bindings for `vizij-motion-core`.
//!
//! Each export takes a plain JS object shaped like the matching core request
//! record (camelCase fields) and returns a plain JS object. Failures surface
//! as thrown `Error`s carrying the core message.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_motion_core::api::{
    BezierPathRequest, BezierRequest, HealthResponse, MinimumJerkRequest, OuProcessRequest,
    PhysicsRequest, VelocityProfileRequest,
};
use vizij_motion_core::{MotionError, Route};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

fn decode<T: DeserializeOwned>(op: &str, value: JsValue) -> Result<T, JsError> {
    if jsvalue_is_undefined_or_null(&value) {
        return Err(JsError::new(&format!("{op}: request is null/undefined")));
    }
    swb::from_value(value).map_err(|e| JsError::new(&format!("{op} parse error: {e}")))
}

fn encode<T: Serialize>(op: &str, value: &T) -> Result<JsValue, JsError> {
    // Plain objects rather than ES Maps so callers can read fields directly.
    let serializer = swb::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("{op} output error: {e}")))
}

fn run<Req, Res>(
    op: &str,
    request: JsValue,
    f: impl FnOnce(Req) -> Result<Res, MotionError>,
) -> Result<JsValue, JsError>
where
    Req: DeserializeOwned,
    Res: Serialize,
{
    set_panic_hook();
    let req: Req = decode(op, request)?;
    let res = f(req).map_err(|e| JsError::new(&format!("{op}: {e}")))?;
    encode(op, &res)
}

/// `{ status: "ok" }`
#[wasm_bindgen]
pub fn health() -> Result<JsValue, JsError> {
    encode("health", &HealthResponse::default())
}

/// Sample a cubic Bezier from explicit control points.
/// Example: `bezier({ p0, p1, p2, p3, numPoints: 50 })`
#[wasm_bindgen]
pub fn bezier(request: JsValue) -> Result<JsValue, JsError> {
    run("bezier", request, |req: BezierRequest| req.run())
}

/// Synthesize a Bezier path between `start` and `end`.
#[wasm_bindgen(js_name = bezierPath)]
pub fn bezier_path(request: JsValue) -> Result<JsValue, JsError> {
    run("bezierPath", request, |req: BezierPathRequest| req.run())
}

#[wasm_bindgen(js_name = minimumJerk)]
pub fn minimum_jerk(request: JsValue) -> Result<JsValue, JsError> {
    run("minimumJerk", request, |req: MinimumJerkRequest| req.run())
}

/// Returns `{ jitterX, jitterY }`.
#[wasm_bindgen(js_name = ouProcess)]
pub fn ou_process(request: JsValue) -> Result<JsValue, JsError> {
    run("ouProcess", request, |req: OuProcessRequest| req.run())
}

#[wasm_bindgen]
pub fn physics(request: JsValue) -> Result<JsValue, JsError> {
    run("physics", request, |req: PhysicsRequest| req.run())
}

#[wasm_bindgen(js_name = velocityProfile)]
pub fn velocity_profile(request: JsValue) -> Result<JsValue, JsError> {
    run("velocityProfile", request, |req: VelocityProfileRequest| req.run())
}

/// Route-style dispatch: `handle("/api/physics", body)`. `body` may be a JS
/// object or a JSON string.
#[wasm_bindgen]
pub fn handle(route: &str, body: JsValue) -> Result<JsValue, JsError> {
    set_panic_hook();
    let route = Route::from_path(route).map_err(|e| JsError::new(&e.to_string()))?;
    let text = match body.as_string() {
        Some(s) => s,
        None if jsvalue_is_undefined_or_null(&body) => String::from("{}"),
        None => {
            let json: serde_json::Value = swb::from_value(body)
                .map_err(|e| JsError::new(&format!("handle parse error: {e}")))?;
            json.to_string()
        }
    };
    let out = vizij_motion_core::handle_json(route, &text)
        .map_err(|e| JsError::new(&e.to_string()))?;
    encode("handle", &out)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
