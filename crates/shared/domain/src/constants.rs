//! Well-known setting keys and file names of an application tree.

/// Comma-separated list of enabled modules, in load order.
pub const MODULES: &str = "modules";
/// Shell command that compresses the combined JavaScript.
pub const JS_COMPRESS: &str = "js_compress";
/// Shell command that compresses the combined stylesheet.
pub const CSS_COMPRESS: &str = "css_compress";
/// Treat compressor failures as fatal.
pub const COMPRESS_STRICT: &str = "compress_strict";
/// Seconds before a compressor process is killed.
pub const COMPRESS_TIMEOUT: &str = "compress_timeout";

pub const HANDLER_MODULES: &str = "handler_modules";
pub const OUTPUT_MODULES: &str = "output_modules";
pub const INPUT_FILTERS: &str = "input_filters";

/// Keys computed by the build; settings with these names are replaced in the snapshot.
pub const RESERVED_KEYS: [&str; 3] = [HANDLER_MODULES, OUTPUT_MODULES, INPUT_FILTERS];

pub const SETTINGS_FILE: &str = "hm3.ini";
pub const RC_FILE: &str = "hm3.rc";
pub const CONFIG_MAP_FILE: &str = "config_map.html";
pub const ENTRY_FILE: &str = "index.php";
pub const SITE_DIR: &str = "site";
pub const SCRIPT_FILE: &str = "site.js";
pub const STYLE_FILE: &str = "site.css";
pub const SETUP_FILE: &str = "setup.toml";
pub const MODULES_DIR: &str = "modules";
pub const ASSETS_DIR: &str = "assets";
pub const JS_LIBRARY: &str = "third_party/zepto.min.js";

/// Page key that applies a binding to every page.
pub const ALL_PAGES: &str = "*";

/// Random bytes behind the per-deployment cache identifier.
pub const CACHE_ID_BYTES: usize = 32;
/// Random bytes behind the per-deployment site identifier.
pub const SITE_ID_BYTES: usize = 64;
