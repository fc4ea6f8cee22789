//! Built-in manifest used to seed the editor before a real manifest is known.

use crate::document::ManifestDocument;

/// Default manifest text shown when the simulator starts from a site URL alone.
pub const MANIFEST_TEMPLATE: &str = r##"{
  "name": "PWA Starter",
  "short_name": "Starter",
  "description": "A starter Progressive Web App. Edit this manifest to see how each member changes your app on Windows.",
  "display": "standalone",
  "orientation": "any",
  "dir": "ltr",
  "lang": "en-US",
  "start_url": "/",
  "scope": "/",
  "theme_color": "#4f3fb6",
  "background_color": "#ffffff",
  "icons": [
    {
      "src": "https://www.pwabuilder.com/assets/icons/icon_192.png",
      "sizes": "192x192",
      "type": "image/png"
    },
    {
      "src": "https://www.pwabuilder.com/assets/icons/icon_512.png",
      "sizes": "512x512",
      "type": "image/png"
    }
  ],
  "shortcuts": [
    {
      "name": "Start a new project",
      "url": "/new",
      "icons": [
        {
          "src": "https://www.pwabuilder.com/assets/icons/icon_192.png",
          "sizes": "192x192"
        }
      ]
    },
    {
      "name": "Open recent",
      "url": "/recent"
    }
  ],
  "screenshots": [
    {
      "src": "https://www.pwabuilder.com/assets/screenshots/screen1.png",
      "sizes": "1280x720",
      "type": "image/png"
    },
    {
      "src": "https://www.pwabuilder.com/assets/screenshots/screen2.png",
      "sizes": "1280x720",
      "type": "image/png"
    }
  ],
  "categories": ["productivity", "utilities"]
}"##;

/// Parses [`MANIFEST_TEMPLATE`].
pub fn default_manifest_document() -> ManifestDocument {
    ManifestDocument::parse(MANIFEST_TEMPLATE).expect("built-in manifest template is valid JSON")
}
