use super::Page;
use crate::dom;
use ferrara_core::nav::{NavClasses, NavMenu, NavbarStyle, MENU_OPEN_CLASS, TOGGLER_COLLAPSED_CLASS};
use ferrara_core::Result;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

const NAVBAR_SELECTOR: &str = ".navbar";
const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Solid navbar once the page scrolls past the threshold
pub fn init_navbar_style(page: &Page) -> Result<()> {
    let navbar = dom::as_html(&dom::query(page.document(), NAVBAR_SELECTOR)?)?;
    let threshold = page.config().navigation.scroll_threshold_px;
    let window = page.window().clone();

    dom::listen(page.window(), "scroll", move |_| {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let style = NavbarStyle::for_scroll(scroll_y, threshold);
        let decl = navbar.style();
        let result = decl
            .set_property("background-color", &style.background_color)
            .and_then(|_| decl.set_property("backdrop-filter", &style.backdrop_filter));
        if let Err(e) = result {
            tracing::warn!(error = %dom::js_error(e), "Failed to restyle navbar");
        }
    })
}

struct MenuElements {
    toggler: HtmlElement,
    menu: Element,
}

impl MenuElements {
    fn apply(&self, classes: NavClasses) {
        let result = dom::set_class(&self.menu, MENU_OPEN_CLASS, classes.menu_shown).and_then(|_| {
            dom::set_class(&self.toggler, TOGGLER_COLLAPSED_CLASS, classes.toggler_collapsed)
        });
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to update navigation classes");
        }
    }

    fn contains(&self, node: Option<&Node>) -> bool {
        node.is_some() && (self.toggler.contains(node) || self.menu.contains(node))
    }
}

/// Collapsible mobile menu
pub fn init_menu(page: &Page) -> Result<()> {
    let nav = &page.config().navigation;
    let elements = Rc::new(MenuElements {
        toggler: dom::by_id(page.document(), &nav.toggler_id)?,
        menu: dom::by_id(page.document(), &nav.menu_id)?,
    });
    let rendered_open = elements.menu.class_list().contains(MENU_OPEN_CLASS);
    let menu = Rc::new(RefCell::new(NavMenu::with_state(
        nav.collapse_breakpoint_px,
        rendered_open,
    )));

    {
        let elements = elements.clone();
        let menu = menu.clone();
        dom::listen(&elements.toggler.clone(), "click", move |_| {
            let classes = menu.borrow_mut().toggle();
            elements.apply(classes);
        })?;
    }

    for link in dom::query_all(page.document(), NAV_LINK_SELECTOR)? {
        let elements = elements.clone();
        let menu = menu.clone();
        let window = page.window().clone();
        dom::listen(&link, "click", move |_| {
            if let Some(classes) = menu.borrow_mut().on_link_click(dom::viewport_width(&window)) {
                elements.apply(classes);
            }
        })?;
    }

    dom::listen(page.document(), "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = elements.contains(target.as_ref());
        if let Some(classes) = menu.borrow_mut().on_document_click(inside) {
            elements.apply(classes);
        }
    })
}
