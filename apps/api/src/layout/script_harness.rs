//! Runs generated scripts in an embedded QuickJS engine against a minimal DOM.
//!
//! Elements are registered per selector. A title reports a natural text width
//! proportional to its font size, and a block reports its content height. Both also
//! report a layout box that their measurement must see past: `scrollWidth` is never
//! below the box width unless the element is measured at `max-content`, and
//! `scrollHeight` is never below the box height unless the element is measured with
//! `height:auto`.

use rquickjs::{Context, Runtime};
use serde_json::Value;

const DOM_PRELUDE: &str = r#"
var __registry = {};
var __onload = [];
var __timers = [];
var document = {
  querySelector: function (s) { return __registry[s] || null; },
  querySelectorAll: function (s) { return []; }
};
var window = {
  addEventListener: function (type, fn) { if (type === 'load') __onload.push(fn); }
};
function setTimeout(fn) { __timers.push(fn); return __timers.length; }
function fireLoad() {
  __onload.splice(0).forEach(function (fn) { fn(); });
  __timers.splice(0).forEach(function (fn) { fn(); });
}
function mockStyle() {
  return { width: '', height: '', fontSize: '', transform: '', transformOrigin: '' };
}
function mockTitle(selector, boxWidth, widthPerPx) {
  var el = { style: mockStyle(), measurements: 0 };
  Object.defineProperty(el, 'scrollWidth', { get: function () {
    el.measurements++;
    var natural = widthPerPx * parseFloat(el.style.fontSize || '0');
    return el.style.width === 'max-content' ? natural : Math.max(boxWidth, natural);
  }});
  __registry[selector] = el;
  return el;
}
function mockBlock(selector, boxHeight, contentHeight) {
  var el = { style: mockStyle() };
  Object.defineProperty(el, 'scrollHeight', { get: function () {
    return el.style.height === 'auto' ? contentHeight : Math.max(boxHeight, contentHeight);
  }});
  __registry[selector] = el;
  return el;
}
"#;

/// Evaluates `setup`, then `script`, then `report`, which must end in an expression
/// producing a JSON string.
pub(crate) fn run(setup: &str, script: &str, report: &str) -> Value {
    let runtime = Runtime::new().expect("js runtime");
    let context = Context::full(&runtime).expect("js context");
    let source = format!("{DOM_PRELUDE}\n{setup}\n{script}\n{report}");
    let json: String = context.with(|ctx| {
        ctx.eval::<String, _>(source)
            .expect("script evaluation should succeed")
    });
    serde_json::from_str(&json).expect("report must be JSON")
}

/// Inline script body of an exported document.
pub(crate) fn inline_script(html: &str) -> &str {
    let start = html.find("<script>").expect("inline script") + "<script>".len();
    let end = html[start..].find("</script>").expect("closing tag") + start;
    &html[start..end]
}
