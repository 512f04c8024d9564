//! HTML shell assembly.
//!
//! Pure textual splicing of render output into the shell at fixed marker
//! points. Each marker is replaced at most once; absent markers are silently
//! skipped. The function has no side effects and is safe to call repeatedly.

use prerender_core::RenderResult;
use serde_json::Value;

/// Marker replaced by preload link tags.
pub const PRELOAD_LINKS_MARKER: &str = "<!--preload-links-->";
/// Marker replaced by the rendered application markup.
pub const OUTLET_MARKER: &str = "<!--ssr-outlet-->";
/// Marker replaced by the serialized preload state script.
pub const PRELOAD_STATE_MARKER: &str = "<!--preload-state-->";

const HTML_OPEN: &str = "<html>";
const BODY_OPEN: &str = "<body>";
const HEAD_CLOSE: &str = "</head>";

/// Global the preload state is assigned to in the emitted script block.
pub const PRELOAD_STATE_GLOBAL: &str = "window.__PRELOAD_STATE__";

/// Splice a render result into the template shell.
///
/// Replacement is textual and order-independent across markers (each appears
/// at most once in a well-formed template). Empty `html_attrs`/`body_attrs`
/// leave the `<html>`/`<body>` tags untouched.
pub fn assemble(template: &str, result: &RenderResult) -> String {
    let mut page = template.replacen(PRELOAD_LINKS_MARKER, &result.preload_links, 1);

    if !result.html_attrs.is_empty() {
        page = page.replacen(HTML_OPEN, &format!("<html {}>", result.html_attrs), 1);
    }
    if !result.body_attrs.is_empty() {
        page = page.replacen(BODY_OPEN, &format!("<body {}>", result.body_attrs), 1);
    }

    page = page.replacen(HEAD_CLOSE, &format!("{}</head>", result.head_tags), 1);
    page = page.replacen(OUTLET_MARKER, &result.html, 1);
    page.replacen(
        PRELOAD_STATE_MARKER,
        &preload_state_script(&result.context.preload_state),
        1,
    )
}

/// Degrade a template to a client-rendered shell by blanking the app outlet.
///
/// Used when the render entry point fails: the client receives the shell
/// with status 200 and populates it itself.
pub fn client_only_shell(template: &str) -> String {
    template.replacen(OUTLET_MARKER, "", 1)
}

fn preload_state_script(state: &Value) -> String {
    let json = serde_json::to_string(state).unwrap_or_else(|_| "null".to_string());
    format!("<script>{PRELOAD_STATE_GLOBAL} = {json}</script>")
}
