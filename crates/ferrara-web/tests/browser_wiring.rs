//! DOM wiring tests
//!
//! Run in a browser with `wasm-pack test --headless --firefox crates/ferrara-web`.

#[cfg(target_arch = "wasm32")]
mod browser_tests {
    use ferrara_core::animation::CounterAnimation;
    use ferrara_core::nav::MENU_OPEN_CLASS;
    use ferrara_core::{SiteConfig, SiteError, Threshold};
    use ferrara_web::app::{navigation, reviews, Page};
    use ferrara_web::{dom, observer, timer};
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    /// Insert markup at the top of the body, pinned inside the viewport
    fn mount(html: &str) -> Element {
        let document = dom::document().unwrap();
        let body = document.body().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_attribute("style", "position: fixed; top: 0; left: 0; width: 200px;")
            .unwrap();
        root.set_inner_html(html);
        body.insert_before(&root, body.first_child().as_ref()).unwrap();
        root
    }

    fn page_with_reviews(items: Vec<ferrara_core::review::ReviewItem>) -> Page {
        let mut config = SiteConfig::embedded().unwrap();
        config.reviews.items = items;
        Page::new(config).unwrap()
    }

    fn element<T: JsCast>(id: &str) -> T {
        dom::by_id(&dom::document().unwrap(), id).unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_fired_target_is_unobserved_and_fires_once() {
        let root = mount(r#"<div style="height: 40px">stat</div>"#);
        let target = root.first_element_child().unwrap();
        let fired = Rc::new(Cell::new(0));
        let count = fired.clone();

        let watch = observer::observe_once(vec![target.clone()], Threshold::ANY, move |_| {
            count.set(count.get() + 1)
        })
        .unwrap();
        assert_eq!(watch.observed(), 1);

        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 1);
        assert_eq!(watch.released(), 1);
        assert_eq!(watch.pending(), 0);

        let style = target.dyn_ref::<HtmlElement>().unwrap().style();
        style.set_property("display", "none").unwrap();
        TimeoutFuture::new(100).await;
        style.set_property("display", "block").unwrap();
        TimeoutFuture::new(100).await;
        assert_eq!(fired.get(), 1);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_intersection_observer_skips_feature() {
        let window = dom::window().unwrap();
        let key = JsValue::from_str("IntersectionObserver");
        let saved = js_sys::Reflect::get(&window, &key).unwrap();
        js_sys::Reflect::set(&window, &key, &JsValue::UNDEFINED).unwrap();

        let root = mount("<span>stat</span>");
        let result = observer::observe_once(vec![root.clone()], Threshold::ANY, |_| {
            panic!("action must not run without an observer")
        });
        js_sys::Reflect::set(&window, &key, &saved).unwrap();
        root.remove();

        let err = result.unwrap_err();
        assert!(matches!(err, SiteError::UnsupportedFacility(_)));
        assert!(err.is_absent_feature());
        assert!(observer::ensure_supported().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_empty_review_queue_hides_control_at_mount() {
        let root = mount(
            r#"<div id="reviewsContainer"></div><button id="loadMoreReviews">View More Reviews</button>"#,
        );
        reviews::init(&page_with_reviews(Vec::new())).unwrap();

        let button: HtmlElement = element("loadMoreReviews");
        assert_eq!(button.style().get_property_value("display").unwrap(), "none");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_load_more_reveals_batches_until_hidden() {
        let root = mount(
            r#"<div id="reviewsContainer"></div><button id="loadMoreReviews">View More Reviews</button>"#,
        );
        let items = SiteConfig::embedded().unwrap().reviews.items;
        reviews::init(&page_with_reviews(items)).unwrap();

        let button: HtmlElement = element("loadMoreReviews");
        let container: Element = element("reviewsContainer");
        assert!(button.text_content().unwrap().contains("View 6 More Reviews"));

        button.click();
        assert_eq!(container.child_element_count(), 3);
        assert!(container.inner_html().contains("Sarah Johnson"));
        assert!(button.text_content().unwrap().contains("View 3 More Reviews"));

        button.click();
        assert_eq!(container.child_element_count(), 6);
        assert_eq!(button.style().get_property_value("display").unwrap(), "none");

        button.click();
        assert_eq!(container.child_element_count(), 6);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_counter_interval_clears_itself() {
        let root = mount("<span>0</span>");
        let stat = root.first_element_child().unwrap();
        let handle = timer::run_counter(stat.clone(), CounterAnimation::new(120, 64, 16).unwrap());
        assert!(handle.is_running());

        TimeoutFuture::new(300).await;
        assert!(!handle.is_running());
        assert_eq!(stat.text_content().as_deref(), Some("120"));
        assert!(stat.class_list().contains(timer::FRAME_CLASS));

        stat.set_text_content(Some("stopped"));
        TimeoutFuture::new(100).await;
        assert_eq!(stat.text_content().as_deref(), Some("stopped"));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_rendered_open_menu_is_not_reset_at_mount() {
        let root = mount(
            r#"<button id="navToggler">menu</button><div id="navbarNav" class="collapse show"></div>"#,
        );
        let page = Page::new(SiteConfig::embedded().unwrap()).unwrap();
        navigation::init_menu(&page).unwrap();

        let menu: Element = element("navbarNav");
        let toggler: HtmlElement = element("navToggler");
        assert!(menu.class_list().contains(MENU_OPEN_CLASS));

        toggler.click();
        assert!(!menu.class_list().contains(MENU_OPEN_CLASS));
        root.remove();
    }
}
