mod console;
mod report;

pub use report::{ERROR_PREFIX, NO_OUTPUT_PLACEHOLDER, RunReport, UNKNOWN_ERROR};

use boa_engine::{Context, JsError, JsObject, JsString, JsValue, js_string};

/// Name of the only parameter of the constructed function.
const CONSOLE_PARAM: &str = "console";

/// Function declared after the user code. Declarations are hoisted, so it
/// exists on entry only if the parser consumed the whole body.
const BODY_END_MARKER: &str = "__codepad_body_end__";

/// Message thrown when the body stops at an unmatched `}`.
const UNMATCHED_BRACE: &str = "Unexpected token '}'";

/// Execute a JavaScript snippet and return what it logged or why it failed.
///
/// The snippet becomes the body of `new Function("console", code)`, which is
/// invoked once with an object whose `log` method is captured. Each call gets
/// a fresh Boa context, so nothing survives between runs.
///
/// Only `console.log` is intercepted. Boa offers no DOM, timers, network or
/// module loading, but nothing bounds CPU or memory: an infinite loop never
/// returns.
pub fn execute_snippet(code: &str) -> RunReport {
    console::reset_captured();

    let mut context = Context::default();
    let outcome = invoke(code, &mut context);
    let logs = console::take_captured();

    match outcome {
        Ok(()) => {
            tracing::debug!(lines = logs.len(), "snippet finished");
            RunReport { logs, error: None }
        }
        Err(err) => {
            let message = failure_message(&err, &mut context)
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            tracing::debug!(%message, lines = logs.len(), "snippet threw");
            RunReport {
                logs,
                ..RunReport::with_error(message)
            }
        }
    }
}

/// Execute a snippet and render the result for the console panel.
pub fn run_code(code: &str) -> String {
    execute_snippet(code).render()
}

fn invoke(code: &str, context: &mut Context) -> Result<(), JsError> {
    let function = compile(code, context)?;
    let console = console::build_console(context);
    function.call(&JsValue::undefined(), &[console.into()], context)?;
    Ok(())
}

// Parse errors surface here as a SyntaxError thrown by the constructor.
// Boa stops reading a function body at the first unmatched `}` without
// complaint, so the body is framed by a guard and a trailing marker
// declaration; a truncated parse drops the marker and the guard throws
// before any user statement runs.
fn compile(code: &str, context: &mut Context) -> Result<JsObject, JsError> {
    let constructor = context.intrinsics().constructors().function().constructor();
    let args = [
        JsValue::from(JsString::from(CONSOLE_PARAM)),
        JsValue::from(JsString::from(guarded_body(code).as_str())),
    ];
    constructor.construct(&args, None, context)
}

// The guard shares the first line with the user code so reported line
// numbers stay the same. It is a block so a leading `else` stays invalid.
fn guarded_body(code: &str) -> String {
    format!(
        "{{ if (typeof {BODY_END_MARKER} !== \"function\") throw new SyntaxError(\"{UNMATCHED_BRACE}\"); }}{code}\nfunction {BODY_END_MARKER}() {{}}"
    )
}

/// The `message` of a thrown value, if it has a non-empty one.
fn failure_message(err: &JsError, context: &mut Context) -> Option<String> {
    if let Some(native) = err.as_native() {
        return non_empty(native.message().to_string());
    }

    let thrown = err.as_opaque()?;
    let object = thrown.as_object()?;
    let message = object.get(js_string!("message"), context).ok()?;
    if message.is_null_or_undefined() {
        return None;
    }

    let text = message.to_string(context).ok()?.to_std_string_escaped();
    non_empty(text)
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
