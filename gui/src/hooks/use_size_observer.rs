use dioxus::prelude::*;
use error_stack::{report, Report};
use log::{debug, warn};
use serde_json::Value::Number;

use isogrid_core::error::IsogridError;
use isogrid_core::sizing::BoxSize;

/// Reports the element's size once it's mounted, and again whenever it or the
/// window is resized. Gives up on finding the element after ~2 seconds of frames.
const OBSERVE_JS: &str = r#"
  const id = "__ELEMENT_ID__";
  const registry = (window.__isogridSizeObservers = window.__isogridSizeObservers || {});
  const report = () => {
    const el = document.getElementById(id);
    dioxus.send({ width: el ? el.offsetWidth : null, height: el ? el.offsetHeight : null });
  };
  let attempts = 0;
  const attach = () => {
    const el = document.getElementById(id);
    if (!el) {
      attempts += 1;
      if (attempts < 120) {
        requestAnimationFrame(attach);
      } else {
        report();
      }
      return;
    }
    const observer = typeof ResizeObserver !== "undefined" ? new ResizeObserver(report) : null;
    if (observer) {
      observer.observe(el);
    }
    window.addEventListener("resize", report);
    registry[id] = { observer, listener: report };
    report();
  };
  attach();
  await new Promise(() => {});
"#;

const UNOBSERVE_JS: &str = r#"
  const id = "__ELEMENT_ID__";
  const registry = window.__isogridSizeObservers || {};
  const entry = registry[id];
  if (entry) {
    if (entry.observer) {
      entry.observer.disconnect();
    }
    window.removeEventListener("resize", entry.listener);
    delete registry[id];
  }
"#;

/// A hook that tracks the pixel size of the element with the given id.
///
/// The value is `None` until the element has been measured, and a failed
/// measurement keeps the previous value. The resize listeners are installed when
/// the calling component mounts and removed when it's dropped.
pub fn use_size_observer(element_id: String) -> Signal<Option<BoxSize>> {
  let mut size_state = use_signal(|| None);

  let observe_id = element_id.clone();
  use_future(move || {
    let js = OBSERVE_JS.replace("__ELEMENT_ID__", &observe_id);
    let observe_id = observe_id.clone();
    async move {
      let mut eval = document::eval(&js);
      loop {
        match eval.recv::<serde_json::Value>().await {
          Ok(value) => match size_from_json_value(&value) {
            Ok(size) => {
              if *size_state.peek() != Some(size) {
                debug!("element {observe_id} measured at {}x{}", size.width, size.height);
                size_state.set(Some(size));
              }
            }
            Err(err) => {
              debug!("element {observe_id} not measurable yet: {err:?}");
              continue;
            }
          },
          Err(err) => {
            warn!("size observer for element {observe_id} stopped: {err}");
            break;
          }
        }
      }
    }
  });

  use_drop(move || {
    debug!("removing size observer for element {element_id}");
    document::eval(&UNOBSERVE_JS.replace("__ELEMENT_ID__", &element_id));
  });

  size_state
}

fn size_from_json_value(value: &serde_json::Value) -> Result<BoxSize, Report<IsogridError>> {
  match (&value["width"], &value["height"]) {
    (Number(w), Number(h)) => {
      let w = w
        .as_f64()
        .ok_or_else(|| report!(IsogridError::InvalidContainerSize(format!("invalid js number {w:?}"))))?;
      let h = h
        .as_f64()
        .ok_or_else(|| report!(IsogridError::InvalidContainerSize(format!("invalid js number {h:?}"))))?;
      Ok(BoxSize::new(w, h))
    }
    _ => Err(report!(IsogridError::InvalidContainerSize(format!(
      "unexpected json value: {value:?}"
    )))),
  }
}
