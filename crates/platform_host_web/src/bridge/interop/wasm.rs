use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
const blockers = new Map();
let nextBlocker = 1;

function blockContextMenu(event) {
  event.preventDefault();
}

export async function jsFetchText(url) {
  const response = await fetch(url, { method: 'GET', headers: { Accept: 'application/json' } });
  if (!response.ok) {
    throw new Error(`request failed with status ${response.status}`);
  }
  return await response.text();
}

export function jsInstallContextMenuBlocker() {
  if (typeof document === 'undefined') {
    throw new Error('document is unavailable in this browser context');
  }
  const handle = nextBlocker++;
  document.addEventListener('contextmenu', blockContextMenu);
  blockers.set(handle, blockContextMenu);
  return handle;
}

export function jsRemoveContextMenuBlocker(handle) {
  const listener = blockers.get(handle);
  if (!listener) return;
  blockers.delete(handle);
  if (blockers.size === 0) {
    document.removeEventListener('contextmenu', listener);
  }
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsFetchText)]
    fn js_fetch_text(url: &str) -> Promise;
    #[wasm_bindgen(catch, js_name = jsInstallContextMenuBlocker)]
    fn js_install_context_menu_blocker() -> Result<u32, JsValue>;
    #[wasm_bindgen(js_name = jsRemoveContextMenuBlocker)]
    fn js_remove_context_menu_blocker(handle: u32);
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub async fn fetch_text(url: &str) -> Result<String, String> {
    let value = JsFuture::from(js_fetch_text(url))
        .await
        .map_err(js_error_to_string)?;
    value
        .as_string()
        .ok_or_else(|| "fetch returned a non-text body".to_string())
}

pub fn install_context_menu_blocker() -> Result<u32, String> {
    js_install_context_menu_blocker().map_err(js_error_to_string)
}

pub fn remove_context_menu_blocker(handle: u32) {
    js_remove_context_menu_blocker(handle);
}
