/// DOM wiring for the web frontend.
///
/// Element ids and inline styles the host page and this crate agree on.
// Host element the graphic mounts into; `<body>` is used when it is missing
pub const DEFAULT_ROOT_ID: &str = "app-root";

// Class added to the host element while a view is mounted
pub const ROOT_CLASS: &str = "neural-aura-root";

// Full-viewport dark backdrop with a crosshair cursor
pub const ROOT_STYLE: &str = "position:relative;width:100vw;height:100vh;overflow:hidden;\
background:#0f172a;cursor:crosshair";

// The svg covers its host
pub const SVG_LAYOUT_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%";

// Listened to on `window` so movement anywhere in the viewport counts
pub const POINTER_MOVE_EVENT: &str = "pointermove";
