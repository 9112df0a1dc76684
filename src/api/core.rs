//! WASM API for the mode inference engine
//!
//! JavaScript-facing wrappers: degree arrays arrive as `string[]`, results
//! leave as plain strings or serde-serialized objects.

use super::helpers::{deserialize, mode_error, parse_degrees, serialize};
use super::types::{AlteredView, RotationView, SelectedNote};
use crate::analysis::{self, enharmonic};
use crate::models::Accidental;
use crate::{wasm_error, wasm_info, wasm_log};
use wasm_bindgen::prelude::*;

/// Label of the mode best explaining a set of degrees
///
/// # Parameters
/// - `degrees_js`: JavaScript array of degree strings, e.g. `["1", "3b", "5"]`
///
/// # Returns
/// A display label such as `"Aeolian no2 no4 no6b no7b"`
#[wasm_bindgen(js_name = analyzeSingleMode)]
pub fn analyze_single_mode(degrees_js: JsValue) -> Result<String, JsValue> {
    let tokens: Vec<String> = deserialize(degrees_js, "Deserialization error")?;
    let degrees = parse_degrees(&tokens)?;

    let label = analysis::analyze(&degrees);
    wasm_log!("analyzeSingleMode {:?} -> {}", tokens, label);
    Ok(label)
}

/// Analyse every rotation of the selected notes
///
/// # Parameters
/// - `selected_js`: JavaScript array of `{ degreeLabel }` objects
///
/// # Returns
/// Array of `{ index, rotation, intervals, analysis }`, or `null` when
/// nothing is selected
#[wasm_bindgen(js_name = analyzeAllRotations)]
pub fn analyze_all_rotations(selected_js: JsValue) -> Result<JsValue, JsValue> {
    let notes: Vec<SelectedNote> = deserialize(selected_js, "Deserialization error")?;
    if notes.is_empty() {
        return Ok(JsValue::NULL);
    }

    let labels: Vec<String> = notes.into_iter().map(|n| n.degree_label).collect();
    let selection = parse_degrees(&labels)?;

    let views: Vec<RotationView> = analysis::analyze_all_rotations(&selection)
        .iter()
        .map(RotationView::from)
        .collect();
    wasm_info!("analyzeAllRotations: {} rotations", views.len());

    serialize(&views, "Serialization error")
}

/// Semitone offset (0-11) of one degree
#[wasm_bindgen(js_name = degreeToSemitone)]
pub fn degree_to_semitone(degree: &str) -> Result<u8, JsValue> {
    analysis::degree_to_semitone(degree).map_err(mode_error)
}

/// Cyclic interval sequence of degrees in the order given
#[wasm_bindgen(js_name = degreesToIntervals)]
pub fn degrees_to_intervals(degrees_js: JsValue) -> Result<JsValue, JsValue> {
    let tokens: Vec<String> = deserialize(degrees_js, "Deserialization error")?;
    let intervals = analysis::degrees_to_intervals(&tokens).map_err(mode_error)?;
    serialize(&intervals, "Serialization error")
}

/// Preferred spelling of one degree
#[wasm_bindgen(js_name = normalizeEnharmonics)]
pub fn normalize_enharmonics(degree: &str) -> Result<String, JsValue> {
    enharmonic::normalize(degree)
        .map(|d| d.to_string())
        .map_err(mode_error)
}

/// Whether two spellings of one base step contradict each other
#[wasm_bindgen(js_name = hasConflictingDegrees)]
pub fn has_conflicting_degrees(degrees_js: JsValue) -> Result<bool, JsValue> {
    let tokens: Vec<String> = deserialize(degrees_js, "Deserialization error")?;
    let degrees = parse_degrees(&tokens)?;
    Ok(analysis::has_conflict(&degrees))
}

/// Intervals and label of a rotation after an alteration
///
/// # Returns
/// `{ intervals, analysis }` with space-joined intervals
#[wasm_bindgen(js_name = analyzeAlteredScale)]
pub fn analyze_altered_scale(degrees_js: JsValue) -> Result<JsValue, JsValue> {
    let tokens: Vec<String> = deserialize(degrees_js, "Deserialization error")?;
    let degrees = parse_degrees(&tokens)?;

    let view = AlteredView::from(analysis::analyze_altered_scale(&degrees));
    wasm_log!("analyzeAlteredScale {:?} -> {}", tokens, view.analysis);
    serialize(&view, "Serialization error")
}

/// Change the accidental on one base step
///
/// # Parameters
/// - `degrees_js`: JavaScript array of degree strings
/// - `step`: base step 1-7 to alter
/// - `accidental`: `"#"`, `"b"`, or `""` for natural
///
/// # Returns
/// The altered degree array
#[wasm_bindgen(js_name = applyAlteration)]
pub fn apply_alteration(degrees_js: JsValue, step: u8, accidental: &str) -> Result<JsValue, JsValue> {
    let tokens: Vec<String> = deserialize(degrees_js, "Deserialization error")?;
    let degrees = parse_degrees(&tokens)?;

    let Some(accidental) = Accidental::from_symbol(accidental) else {
        wasm_error!("Invalid accidental: '{}'", accidental);
        return Err(JsValue::from_str(&format!("Invalid accidental: '{}'", accidental)));
    };

    let altered = analysis::apply_alteration(&degrees, step, accidental).map_err(mode_error)?;
    serialize(&altered, "Serialization error")
}

/// Names of catalog scales containing every selected degree
#[wasm_bindgen(js_name = scalesContaining)]
pub fn scales_containing(degrees_js: JsValue) -> Result<JsValue, JsValue> {
    let tokens: Vec<String> = deserialize(degrees_js, "Deserialization error")?;
    let degrees = parse_degrees(&tokens)?;
    serialize(&analysis::scales_containing(&degrees), "Serialization error")
}
