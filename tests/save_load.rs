use egui::pos2;
use sketch_canvas::persistence::{self, PersistenceError};
use sketch_canvas::{
    CanvasApp, CanvasSettings, Document, DragPath, InputEvent, InputLocation, Shape, ShapeKind,
};

fn sample_document() -> Document {
    let mut doc = Document::new();
    doc.add_shape(Shape::new(ShapeKind::Rectangle, 10.0, 20.0, 30.0, 40.0));
    doc.add_shape(Shape::new(ShapeKind::Ellipse, 50.0, 50.0, 25.0, 15.0));
    doc.add_drag_path(DragPath::new(vec![pos2(1.0, 1.0), pos2(2.0, 3.0)]));
    doc
}

fn app_with_file(path: std::path::PathBuf) -> CanvasApp {
    CanvasApp::with_settings(CanvasSettings {
        save_path: path,
        ..Default::default()
    })
}

fn draw_rect(app: &mut CanvasApp) {
    let at = |x, y| InputLocation {
        position: pos2(x, y),
        is_in_canvas: true,
    };
    app.handle_event(&InputEvent::PointerDown { location: at(10.0, 10.0) }, 0.0);
    app.handle_event(&InputEvent::PointerMove { location: at(40.0, 30.0) }, 0.0);
    app.handle_event(&InputEvent::PointerUp { location: at(40.0, 30.0) }, 0.0);
}

#[test]
fn save_then_load_restores_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.json");
    let doc = sample_document();

    persistence::save(&doc, &path).unwrap();
    let loaded = persistence::load(&path).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("canvas.json");
    persistence::save(&sample_document(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn reset_saves_before_clearing() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_file(dir.path().join("canvas.json"));
    draw_rect(&mut app);
    assert_eq!(app.document().shapes().len(), 1);

    assert!(app.redraw_timer().is_pending());

    app.reset_canvas();
    assert!(app.document().is_empty());
    assert!(!app.redraw_timer().is_pending());

    app.load_canvas().unwrap();
    assert_eq!(
        app.document().shapes(),
        &[Shape::new(ShapeKind::Rectangle, 10.0, 10.0, 30.0, 20.0)]
    );
}

#[test]
fn failed_load_keeps_current_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_file(dir.path().join("missing.json"));
    draw_rect(&mut app);

    let err = app.load_canvas().unwrap_err();
    assert!(matches!(err, PersistenceError::Read { .. }));
    assert_eq!(app.document().shapes().len(), 1);
}

#[test]
fn snapshot_json_names_its_parts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.json");
    persistence::save(&sample_document(), &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["shapes"].as_array().unwrap().len(), 2);
    assert_eq!(value["shapes"][1]["kind"], "Ellipse");
    assert_eq!(value["drag_paths"].as_array().unwrap().len(), 1);
}
