/// dragcube web - mounts the draggable cube into a browser page
///
/// The cube is plain DOM: a `div.cube` holding six `div.face` panels, each
/// placed with an inline CSS 3D transform. Dragging the cube appends rotation
/// clauses to the `.cube` element's own transform.

use std::cell::RefCell;
use std::rc::Rc;

use dragcube_core::{CubeConfig, CubeError, TransformTarget};
use wasm_bindgen::prelude::*;

mod dom;
mod logger;

pub use dom::{attach_listeners, build_cube, DomCube, DragSession};

fn to_js(err: CubeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Handle to a mounted cube
#[wasm_bindgen]
pub struct CubeHandle {
    session: Rc<RefCell<DragSession>>,
}

#[wasm_bindgen]
impl CubeHandle {
    /// Current transform text of the `.cube` element
    pub fn transform(&self) -> String {
        self.session.borrow().cube.transform_text()
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.session.borrow().controller.is_dragging()
    }
}

fn mount_config(config: &CubeConfig) -> Result<CubeHandle, CubeError> {
    config.validate()?;
    let model = config.build_cube()?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| CubeError::Dom("no document available".to_string()))?;

    let cube = build_cube(&document, &config.container_id, &model)?;
    let session = Rc::new(RefCell::new(DragSession {
        controller: config.drag_controller(),
        cube,
    }));
    attach_listeners(&document, Rc::clone(&session))?;

    Ok(CubeHandle { session })
}

/// Build the cube inside the element with id `container_id` and start
/// listening for drags.
#[wasm_bindgen]
pub fn mount(container_id: &str) -> Result<CubeHandle, JsValue> {
    let config = CubeConfig {
        container_id: container_id.to_string(),
        ..CubeConfig::default()
    };
    mount_config(&config).map_err(to_js)
}

/// Like [`mount`], with every setting taken from a TOML document
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(toml: &str) -> Result<CubeHandle, JsValue> {
    let config = CubeConfig::from_toml_str(toml).map_err(to_js)?;
    mount_config(&config).map_err(to_js)
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Report panics from event handlers in the console instead of a bare trap
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    Ok(())
}
