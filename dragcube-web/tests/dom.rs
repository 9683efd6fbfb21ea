#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use dragcube_core::{CubeError, CubeModel, DragController, TransformClause, TransformTarget};
use dragcube_web::{attach_listeners, build_cube, mount, DragSession};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn container(id: &str) -> Element {
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn mouse_event(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

fn inline_transform(element: &HtmlElement) -> String {
    element.style().get_property_value("transform").unwrap()
}

#[wasm_bindgen_test]
fn builds_cube_with_six_positioned_faces() {
    let container = container("build-test");
    build_cube(&document(), "build-test", &CubeModel::default()).unwrap();

    let cubes = container.children();
    assert_eq!(cubes.length(), 1);
    let cube = cubes.item(0).unwrap();
    assert_eq!(cube.class_name(), "cube");

    let expected = [
        ("1", "rotateX(90deg) translateZ(150px)"),
        ("2", "rotateX(-90deg) translateZ(150px)"),
        ("3", "rotateY(90deg) translateZ(150px)"),
        ("4", "rotateY(-90deg) translateZ(150px)"),
        ("5", "translateZ(150px)"),
        ("6", "translateZ(-150px)"),
    ];
    let faces = cube.children();
    assert_eq!(faces.length(), 6);
    for (index, (label, transform)) in expected.iter().enumerate() {
        let face = faces
            .item(index as u32)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        assert_eq!(face.class_name(), "face");
        assert_eq!(face.text_content().as_deref(), Some(*label));
        assert_eq!(inline_transform(&face), *transform);
    }

    let cube = cube.dyn_into::<HtmlElement>().unwrap();
    assert_eq!(inline_transform(&cube), "");
}

#[wasm_bindgen_test]
fn missing_container_is_reported() {
    let result = build_cube(&document(), "no-such-container", &CubeModel::default());
    assert!(matches!(result, Err(CubeError::MissingElement(id)) if id == "no-such-container"));
}

#[wasm_bindgen_test]
fn appending_extends_inline_transform() {
    container("append-test");
    let mut cube = build_cube(&document(), "append-test", &CubeModel::default()).unwrap();

    cube.append_clauses(&[TransformClause::RotateX(1.0), TransformClause::RotateY(2.0)]);
    assert_eq!(cube.transform_text(), "rotateX(1deg) rotateY(2deg)");

    cube.append_clauses(&[TransformClause::RotateX(3.0), TransformClause::RotateY(0.0)]);
    assert_eq!(
        cube.transform_text(),
        "rotateX(1deg) rotateY(2deg) rotateX(3deg) rotateY(0deg)"
    );
    assert_eq!(inline_transform(cube.element()), cube.transform_text());
}

#[wasm_bindgen_test]
fn drag_listeners_rotate_the_cube() {
    container("listener-test");
    let document = document();
    let cube = build_cube(&document, "listener-test", &CubeModel::default()).unwrap();
    let element = cube.element().clone();
    let session = Rc::new(RefCell::new(DragSession {
        controller: DragController::new(),
        cube,
    }));
    attach_listeners(&document, Rc::clone(&session)).unwrap();

    // moves before a press on the cube do nothing
    document.dispatch_event(&mouse_event("mousemove", 50, 50)).unwrap();
    assert_eq!(inline_transform(&element), "");

    // a press elsewhere on the page does not start a drag
    document.dispatch_event(&mouse_event("mousedown", 100, 100)).unwrap();
    assert!(!session.borrow().controller.is_dragging());

    element.dispatch_event(&mouse_event("mousedown", 100, 100)).unwrap();
    assert!(session.borrow().controller.is_dragging());

    document.dispatch_event(&mouse_event("mousemove", 110, 105)).unwrap();
    assert_eq!(inline_transform(&element), "rotateX(1deg) rotateY(2deg)");
    let state = session.borrow().controller.state();
    assert_eq!((state.last_x, state.last_y), (110.0, 105.0));

    document.dispatch_event(&mouse_event("mouseup", 400, 400)).unwrap();
    assert!(!session.borrow().controller.is_dragging());

    document.dispatch_event(&mouse_event("mousemove", 200, 200)).unwrap();
    assert_eq!(inline_transform(&element), "rotateX(1deg) rotateY(2deg)");
}

#[wasm_bindgen_test]
fn mount_returns_live_handle() {
    container("mount-test");
    let handle = mount("mount-test").unwrap();
    assert_eq!(handle.transform(), "");
    assert!(!handle.is_dragging());

    assert!(mount("absent-mount-target").is_err());
}
