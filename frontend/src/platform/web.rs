//! Web platform implementation over `web-sys`

use shared::markup::{MENU_TOGGLE_ID, OVERLAY_ID, SIDEBAR_ID};
use shared::{KeyValueStore, SidebarPart, SidebarSurface, StorageError};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Storage};

/// `window.localStorage`, written with raw string values.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(error) => {
                zoon::eprintln!("localStorage unavailable: {}", js_error_message(&error));
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("window.localStorage".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|error| StorageError::Read {
                key: key.to_string(),
                message: js_error_message(&error),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|error| StorageError::Write {
                key: key.to_string(),
                message: js_error_message(&error),
            })
    }
}

/// The rendered sidebar elements plus the page wrapper.
///
/// The wrapper is looked up on every access because the page may insert it
/// after the sidebar mounted.
pub struct DomSurface {
    document: Document,
    wrapper_id: String,
    sidebar: Option<Element>,
    toggle: Option<Element>,
    overlay: Option<Element>,
}

impl DomSurface {
    pub fn attach(document: Document, host: &Element, wrapper_id: &str) -> Self {
        Self {
            sidebar: query(host, &format!("#{SIDEBAR_ID}")),
            toggle: query(host, &format!("#{MENU_TOGGLE_ID}")),
            overlay: query(host, &format!("#{OVERLAY_ID}")),
            wrapper_id: wrapper_id.to_string(),
            document,
        }
    }

    fn element(&self, part: SidebarPart) -> Option<Element> {
        match part {
            SidebarPart::Sidebar => self.sidebar.clone(),
            SidebarPart::Toggle => self.toggle.clone(),
            SidebarPart::Overlay => self.overlay.clone(),
            SidebarPart::Wrapper => self.document.get_element_by_id(&self.wrapper_id),
        }
    }
}

impl SidebarSurface for DomSurface {
    fn has_class(&self, part: SidebarPart, class: &str) -> bool {
        self.element(part)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn set_class(&mut self, part: SidebarPart, class: &str, enabled: bool) {
        if let Some(element) = self.element(part) {
            if let Err(error) = element.class_list().toggle_with_force(class, enabled) {
                zoon::eprintln!("Failed to update class '{}': {}", class, js_error_message(&error));
            }
        }
    }
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// `window.innerWidth`; zero when no window is available.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// `location.pathname`; empty when unavailable.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

pub fn js_error_message(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}
