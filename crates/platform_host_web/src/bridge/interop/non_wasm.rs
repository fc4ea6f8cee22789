fn unsupported() -> String {
    "Browser fetch and DOM APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_text(_url: &str) -> Result<String, String> {
    Err(unsupported())
}

pub fn install_context_menu_blocker() -> Result<u32, String> {
    Err(unsupported())
}

pub fn remove_context_menu_blocker(_handle: u32) {}
