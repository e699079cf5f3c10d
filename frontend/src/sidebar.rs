//! Sidebar lifecycle in the browser
//!
//! Mounts the shared [`SidebarNav`] into the `<sidebar-nav>` host element,
//! routes clicks to it and runs reconciliation from every hook that can
//! observe a late style application: `DOMContentLoaded` (or the next animation
//! frame when the document already finished parsing) and `window.load`.

use std::cell::RefCell;

use shared::markup::{COLLAPSE_BUTTON_ID, MENU_ITEM_CLASS, MENU_TOGGLE_ID, OVERLAY_ID};
use shared::{Reconciliation, SidebarConfig, SidebarNav};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, Window};

use crate::platform::web::{js_error_message, query};
use crate::platform::{BrowserStorage, DomSurface, current_path, viewport_width};

const HOST_SELECTOR: &str = "sidebar-nav";

type BrowserSidebar = SidebarNav<BrowserStorage, DomSurface>;

thread_local! {
    static SIDEBAR: RefCell<Option<BrowserSidebar>> = const { RefCell::new(None) };
}

fn with_sidebar<F>(f: F)
where
    F: FnOnce(&mut BrowserSidebar),
{
    SIDEBAR.with(|cell| match cell.try_borrow_mut() {
        Ok(mut sidebar) => {
            if let Some(sidebar) = sidebar.as_mut() {
                f(sidebar);
            }
        }
        Err(_) => zoon::eprintln!("⚠️ Sidebar busy - event ignored"),
    });
}

/// Render the sidebar into the first `<sidebar-nav>` element and wire it up.
pub fn mount(config: SidebarConfig) {
    let Some(window) = web_sys::window() else {
        zoon::eprintln!("⚠️ No window - sidebar not mounted");
        return;
    };
    let Some(document) = window.document() else {
        zoon::eprintln!("⚠️ No document - sidebar not mounted");
        return;
    };
    let Some(host) = document.query_selector(HOST_SELECTOR).ok().flatten() else {
        zoon::eprintln!("⚠️ No <{}> element - sidebar not mounted", HOST_SELECTOR);
        return;
    };

    let wrapper_id = config.wrapper_id.clone();
    let sidebar = SidebarNav::mount(config, BrowserStorage::local(), &current_path(), |markup| {
        host.set_inner_html(markup.html());
        DomSurface::attach(document.clone(), &host, &wrapper_id)
    });
    SIDEBAR.with(|cell| *cell.borrow_mut() = Some(sidebar));

    wire_controls(&host);
    schedule_reconcile(&window, &document);
}

fn wire_controls(host: &Element) {
    if let Some(button) = query(host, &format!("#{COLLAPSE_BUTTON_ID}")) {
        listen(&button, "click", || with_sidebar(|sidebar| sidebar.on_collapse_click()));
    }

    if let Some(toggle) = query(host, &format!("#{MENU_TOGGLE_ID}")) {
        listen(&toggle, "click", || {
            let width = viewport_width();
            with_sidebar(|sidebar| {
                let viewport = sidebar.viewport_for(width);
                sidebar.on_toggle_click(viewport);
            });
        });
    }

    if let Some(overlay) = query(host, &format!("#{OVERLAY_ID}")) {
        listen(&overlay, "click", || with_sidebar(|sidebar| sidebar.on_overlay_click()));
    }

    let Ok(links) = host.query_selector_all(&format!(".{MENU_ITEM_CLASS}")) else {
        return;
    };
    for index in 0..links.length() {
        let Some(link) = links.get(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        listen(&link, "click", || {
            let width = viewport_width();
            with_sidebar(|sidebar| {
                let viewport = sidebar.viewport_for(width);
                sidebar.on_menu_link_click(viewport);
            });
        });
    }
}

fn schedule_reconcile(window: &Window, document: &Document) {
    if document.ready_state() == "loading" {
        listen(document, "DOMContentLoaded", || reconcile_now("DOMContentLoaded"));
    } else {
        let callback = Closure::once_into_js(|| reconcile_now("animation frame"));
        if let Err(error) = window.request_animation_frame(callback.unchecked_ref()) {
            zoon::eprintln!("requestAnimationFrame failed: {}", js_error_message(&error));
        }
    }

    listen(window, "load", || reconcile_now("window load"));
}

fn reconcile_now(source: &str) {
    let width = viewport_width();
    with_sidebar(|sidebar| {
        let viewport = sidebar.viewport_for(width);
        if let Reconciliation::Corrected { collapsed } = sidebar.reconcile(viewport) {
            zoon::println!("Sidebar state corrected on {}: collapsed={}", source, collapsed);
        }
    });
}

/// Attach a listener that lives as long as the page.
fn listen(target: &EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
    if let Err(error) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        zoon::eprintln!("Failed to listen for '{}': {}", event, js_error_message(&error));
    }
    closure.forget();
}
