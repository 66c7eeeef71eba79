//! The `console` object handed to user code.
//!
//! Only `log` exists on it. Native functions built from plain fn pointers
//! cannot capture state, so captured lines go through a thread-local buffer.
//! A run never leaves the thread it started on.

use std::cell::RefCell;

use boa_engine::object::ObjectInitializer;
use boa_engine::{Context, JsObject, JsResult, JsValue, NativeFunction, js_string};

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Build the injected console object.
pub fn build_console(context: &mut Context) -> JsObject {
    ObjectInitializer::new(context)
        .function(NativeFunction::from_fn_ptr(console_log), js_string!("log"), 0)
        .build()
}

/// Discard anything captured by a previous run on this thread.
pub fn reset_captured() {
    CAPTURED.with(|lines| lines.borrow_mut().clear());
}

/// Take the lines captured so far.
pub fn take_captured() -> Vec<String> {
    CAPTURED.with(|lines| lines.take())
}

// Same conversion as `Array.prototype.join(" ")`: null and undefined become
// empty strings, everything else goes through ToString (which may throw).
fn console_log(_this: &JsValue, args: &[JsValue], context: &mut Context) -> JsResult<JsValue> {
    let mut parts = Vec::with_capacity(args.len());
    for arg in args {
        if arg.is_null_or_undefined() {
            parts.push(String::new());
        } else {
            parts.push(arg.to_string(context)?.to_std_string_escaped());
        }
    }

    let line = parts.join(" ");
    tracing::trace!(%line, "console.log");
    CAPTURED.with(|lines| lines.borrow_mut().push(line));

    Ok(JsValue::undefined())
}
