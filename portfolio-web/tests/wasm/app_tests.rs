use portfolio_web::app::App;
use portfolio_web::dom;
use wasm_bindgen_test::*;
use yew::Renderer;

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
async fn app_mounts_main_landmark_and_season() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    yew::platform::time::sleep(std::time::Duration::from_millis(50)).await;
    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("main").is_some());
    let root = doc.document_element().expect("html element");
    assert!(root.get_attribute("data-season").is_some());
}
