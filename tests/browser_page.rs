#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;

use mailbar::facades::wasm::page::init_listeners;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

struct Fixture {
    root: Element,
    mail_item: HtmlElement,
    other_item: HtmlElement,
    popup: Element,
}

fn element(tag: &str, id: &str, class: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element(tag).unwrap();
    if !id.is_empty() {
        element.set_id(id);
    }
    element.set_class_name(class);
    element
}

fn fixture(root_class: &str) -> Fixture {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = element("div", "", root_class);
    let menu = element("ul", "", "nav-menu-items");
    let other_item = element("li", "", "nav-menu-item");
    let mail_item = element("li", "nav-mail-item", "nav-menu-item");
    let popup = element("div", "", "mail-popup");

    menu.append_child(&other_item).unwrap();
    menu.append_child(&mail_item).unwrap();
    root.append_child(&menu).unwrap();
    root.append_child(&popup).unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    Fixture {
        root,
        mail_item: mail_item.dyn_into().unwrap(),
        other_item: other_item.dyn_into().unwrap(),
        popup,
    }
}

fn page_config(root_selector: &str) -> JsValue {
    page_config_with(root_selector, &[])
}

fn page_config_with(root_selector: &str, fields: &[(&str, &str)]) -> JsValue {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"appRoot".into(), &root_selector.into()).unwrap();
    for (key, value) in fields {
        js_sys::Reflect::set(&config, &(*key).into(), &(*value).into()).unwrap();
    }
    config.into()
}

#[wasm_bindgen_test]
fn test_clicks_drive_menu_and_popup() {
    let page = fixture("app-clicks");
    init_listeners(page_config(".app-clicks"), JsValue::UNDEFINED).unwrap();

    page.mail_item.click();
    assert!(page.mail_item.class_list().contains("nav-toggled"));
    assert!(page.popup.class_list().contains("mail-toggled"));

    page.other_item.click();
    assert!(!page.mail_item.class_list().contains("nav-toggled"));
    assert!(page.other_item.class_list().contains("nav-toggled"));
    assert!(!page.popup.class_list().contains("mail-toggled"));

    page.root.remove();
}

#[wasm_bindgen_test]
fn test_missing_root_is_reported() {
    let error = init_listeners(page_config(".no-such-root"), JsValue::UNDEFINED)
        .err()
        .unwrap();
    assert_eq!(
        error.as_string().as_deref(),
        Some("no element matches '.no-such-root'")
    );
}

#[wasm_bindgen_test]
fn test_positional_mail_item_selector() {
    let page = fixture("app-positional");
    page.mail_item.remove_attribute("id").unwrap();
    let config = page_config_with(
        ".app-positional",
        &[("mailMenuItem", ".app-positional .nav-menu-items li:nth-child(2)")],
    );
    init_listeners(config, JsValue::UNDEFINED).unwrap();

    page.mail_item.click();
    assert!(page.mail_item.class_list().contains("nav-toggled"));
    assert!(page.popup.class_list().contains("mail-toggled"));

    page.other_item.click();
    assert!(!page.popup.class_list().contains("mail-toggled"));

    page.root.remove();
}

#[wasm_bindgen_test]
fn test_sign_in_before_client_ready_fails() {
    let page = fixture("app-signin");
    let chrome = init_listeners(page_config(".app-signin"), JsValue::UNDEFINED).unwrap();

    assert!(chrome.sign_in().is_err());
    assert!(chrome.is_signed_in().is_err());

    page.root.remove();
}
