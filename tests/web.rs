#![cfg(target_arch = "wasm32")]

use cvterm::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

#[wasm_bindgen_test]
fn renders_welcome_banner() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), App);

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("Welcome to Samuel Lefcourt's Terminal CV!"));
    assert!(text.contains("Terminal CV"));
}

fn terminal_input(root: &web_sys::HtmlElement) -> web_sys::HtmlInputElement {
    root.query_selector("input[data-terminal-input]")
        .unwrap()
        .expect("terminal input is mounted")
        .unchecked_into()
}

fn type_text(input: &web_sys::HtmlInputElement, text: &str) {
    input.set_value(text);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn press(input: &web_sys::HtmlInputElement, key: &str) {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn renders_prompt_input() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), App);

    assert_eq!(terminal_input(&root).value(), "");
}

#[wasm_bindgen_test]
async fn tab_with_several_matches_lists_them_and_keeps_input() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), App);
    let input = terminal_input(&root);
    assert!(!root.text_content().unwrap_or_default().contains("clear"));

    type_text(&input, "c");
    press(&input, "Tab");
    leptos::task::tick().await;

    assert_eq!(input.value(), "c");
    let text = root.text_content().unwrap_or_default();
    for name in ["cat", "cd", "clear"] {
        assert!(text.contains(name), "missing candidate {name}");
    }
}

#[wasm_bindgen_test]
async fn tab_with_one_match_fills_the_input() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), App);
    let input = terminal_input(&root);

    type_text(&input, "l");
    press(&input, "Tab");
    leptos::task::tick().await;

    assert_eq!(input.value(), "ls ");
}
