/// DOM construction and pointer wiring for the cube
use std::cell::RefCell;
use std::rc::Rc;

use dragcube_core::{append_to_text, CubeError, CubeModel, DragController, TransformClause, TransformTarget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

pub(crate) fn dom_error(value: JsValue) -> CubeError {
    CubeError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// The `.cube` element; its inline `transform` is the accumulated rotation
#[derive(Clone)]
pub struct DomCube {
    element: HtmlElement,
}

impl DomCube {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl TransformTarget for DomCube {
    fn append_clauses(&mut self, clauses: &[TransformClause]) {
        let next = append_to_text(&self.transform_text(), clauses);
        if let Err(err) = self.element.style().set_property("transform", &next) {
            log::warn!("failed to update cube transform: {:?}", err);
        }
    }

    fn transform_text(&self) -> String {
        let current = self
            .element
            .style()
            .get_property_value("transform")
            .unwrap_or_default();
        if current == "none" {
            String::new()
        } else {
            current
        }
    }
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, CubeError> {
    let element = document
        .create_element("div")
        .map_err(dom_error)?
        .dyn_into::<HtmlElement>()
        .map_err(|element| CubeError::Dom(format!("{:?} is not an HtmlElement", element)))?;
    element.class_list().add_1(class).map_err(dom_error)?;
    Ok(element)
}

/// Create `div.cube` with its six `div.face` children inside the element
/// with id `container_id`.
pub fn build_cube(document: &Document, container_id: &str, model: &CubeModel) -> Result<DomCube, CubeError> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| CubeError::MissingElement(container_id.to_string()))?;

    let cube = create_div(document, "cube")?;
    container.append_child(&cube).map_err(dom_error)?;

    for face in model.faces() {
        let face_div = create_div(document, "face")?;
        face_div.set_text_content(Some(face.label()));
        face_div
            .style()
            .set_property("transform", &face.transform().to_string())
            .map_err(dom_error)?;
        cube.append_child(&face_div).map_err(dom_error)?;
    }

    log::info!("mounted cube with {} faces into #{}", model.faces().len(), container_id);

    Ok(DomCube { element: cube })
}

/// Pointer state plus the element it rotates
pub struct DragSession {
    pub controller: DragController,
    pub cube: DomCube,
}

/// Register mousedown on the cube and mouseup/mousemove on the document.
/// Listeners live as long as the page.
pub fn attach_listeners(document: &Document, session: Rc<RefCell<DragSession>>) -> Result<(), CubeError> {
    let cube_element = session.borrow().cube.element().clone();

    let down_session = Rc::clone(&session);
    let on_down = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        down_session
            .borrow_mut()
            .controller
            .pointer_down(event.page_x() as f64, event.page_y() as f64);
    });
    cube_element
        .add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_down.forget();

    let up_session = Rc::clone(&session);
    let on_up = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        up_session.borrow_mut().controller.pointer_up();
    });
    document
        .add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_up.forget();

    let move_session = Rc::clone(&session);
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let mut session = move_session.borrow_mut();
        let DragSession { controller, cube } = &mut *session;
        if let Some(clauses) = controller.pointer_move(event.page_x() as f64, event.page_y() as f64, cube) {
            log::trace!("appended {} {}", clauses[0], clauses[1]);
        }
    });
    document
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_move.forget();

    Ok(())
}
