#![cfg(target_arch = "wasm32")]

use life_engine::Life;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_twice_keeps_a_single_interval() {
    let life = Life::new(8).unwrap();
    life.start().unwrap();
    life.start().unwrap();
    assert!(life.running());
    life.stop();
    assert!(!life.running());
}

#[wasm_bindgen_test]
fn config_json_is_exposed() {
    let life = Life::with_config(r#"{"gridSize":16,"tickMs":50}"#.to_string()).unwrap();
    assert_eq!(life.size(), 16);
    assert_eq!(life.tick_ms(), 50);
    assert!(life.config_json().contains("\"gridSize\":16"));
}

#[wasm_bindgen_test]
fn bad_inputs_surface_as_js_errors() {
    assert!(Life::with_config("{".to_string()).is_err());

    let life = Life::new(2).unwrap();
    let err = life.load_cells(vec![0, 1, 2, 0]).unwrap_err();
    assert!(err.as_string().unwrap_or_default().contains("invalid cell"));
}

#[wasm_bindgen_test]
fn on_tick_listener_is_called_per_step() {
    let life = Life::new(4).unwrap();
    let counter = js_sys::Function::new_no_args(
        "globalThis.__lifeTicks = (globalThis.__lifeTicks || 0) + 1;",
    );
    life.set_on_tick(counter);
    life.step();
    life.step();
    life.clear_on_tick();
    life.step();

    let ticks = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("__lifeTicks"))
        .unwrap()
        .as_f64();
    assert_eq!(ticks, Some(2.0));
    assert_eq!(life.generation(), 3);
}

#[wasm_bindgen_test]
fn listener_can_read_and_stop_during_manual_step() {
    let life = Life::new(5).unwrap();
    for col in 1..=3 {
        life.toggle_cell(2, col);
    }
    life.set_on_tick(js_sys::Function::new_no_args(
        "const l = globalThis.__stepLife;
         globalThis.__seenGeneration = Number(l.generation);
         globalThis.__seenPopulation = l.population;
         l.stop();",
    ));

    // Hand the object to JS so every call goes through the generated bindings
    let global = js_sys::global();
    js_sys::Reflect::set(&global, &JsValue::from_str("__stepLife"), &JsValue::from(life)).unwrap();
    js_sys::Function::new_no_args("globalThis.__stepLife.step();")
        .call0(&JsValue::NULL)
        .unwrap();

    let seen = |key: &str| {
        js_sys::Reflect::get(&global, &JsValue::from_str(key))
            .unwrap()
            .as_f64()
    };
    assert_eq!(seen("__seenGeneration"), Some(1.0));
    assert_eq!(seen("__seenPopulation"), Some(3.0));

    js_sys::Function::new_no_args("globalThis.__stepLife.free(); delete globalThis.__stepLife;")
        .call0(&JsValue::NULL)
        .unwrap();
}
