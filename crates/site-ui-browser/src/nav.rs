//! Navigation: active link marking and the mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use site_ui_core::{Menu, UiConfig};

use crate::dom::{self, DomElement, PageBody};

/// Mark the navigation link for the current page as active.
pub fn mark_active_links(document: &web_sys::Document, config: &UiConfig) {
    let Some(location) = document.location() else {
        return;
    };
    let pathname = match location.pathname() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(error = %dom::js_error(&e), "could not read location pathname");
            return;
        }
    };

    let links: Vec<DomElement> = dom::query_all(document, &config.nav_link_selector)
        .into_iter()
        .map(DomElement)
        .collect();
    tracing::debug!(pathname = %pathname, links = links.len(), "marking active nav link");
    site_ui_core::mark_active_links(&pathname, &links);
}

type SharedMenu = Rc<RefCell<Menu<DomElement, PageBody>>>;

/// Listeners driving the mobile menu. Dropping this detaches them.
#[derive(Debug)]
pub struct MenuWiring {
    menu: SharedMenu,
    _listeners: Vec<EventListener>,
}

impl MenuWiring {
    pub fn is_open(&self) -> bool {
        self.menu.borrow().state().is_open()
    }

    /// Close the menu and release the page scroll lock.
    pub fn close(&self) {
        self.menu.borrow_mut().close();
    }
}

/// Wire the hamburger toggle, the close control and the links inside the
/// navigation list. Returns `None` when the toggle or the list is missing.
pub fn wire_menu(document: &web_sys::Document, config: &UiConfig) -> Option<MenuWiring> {
    let (Some(hamburger), Some(nav_list)) = (
        dom::query(document, &config.hamburger_selector),
        dom::query(document, &config.nav_list_selector),
    ) else {
        tracing::debug!("menu controls not present, skipping menu wiring");
        return None;
    };
    let Some(body) = document.body() else {
        tracing::debug!("document has no body, skipping menu wiring");
        return None;
    };

    let menu: SharedMenu = Rc::new(RefCell::new(Menu::new(
        DomElement(hamburger.clone()),
        DomElement(nav_list.clone()),
        PageBody(body),
    )));
    let mut listeners = Vec::new();

    let toggle_menu = menu.clone();
    listeners.push(EventListener::new(&hamburger, "click", move |_| {
        let state = toggle_menu.borrow_mut().toggle();
        tracing::trace!(?state, "menu toggled");
    }));

    if let Some(close) = dom::query(document, &config.close_menu_selector) {
        let close_menu = menu.clone();
        listeners.push(EventListener::new(&close, "click", move |_| {
            close_menu.borrow_mut().close();
        }));
    }

    let links = match nav_list.query_selector_all("a") {
        Ok(list) => dom::elements(&list),
        Err(e) => {
            tracing::warn!(error = %dom::js_error(&e), "could not list nav links");
            Vec::new()
        }
    };
    for link in links {
        let close_menu = menu.clone();
        listeners.push(EventListener::new(&link, "click", move |_| {
            close_menu.borrow_mut().close();
        }));
    }

    tracing::debug!(listeners = listeners.len(), "menu wired");
    Some(MenuWiring {
        menu,
        _listeners: listeners,
    })
}
