use drawer::{rect, Color, Error, PaintCommand, Scene};

#[test]
fn scene_round_trips_through_json() {
    let scene = Scene {
        bounds: rect(0, 0, 10, 10),
        background: Some(Color::WHITE),
        commands: vec![
            PaintCommand::FilledCircle {
                center: drawer::pt(5, 5),
                radius: 3.0,
                colors: vec![Color::BLACK],
            },
            PaintCommand::Rectangle {
                rect: rect(1, 1, 9, 9),
                width: 0.0,
                bounded: true,
                colors: vec![Color::rgb(255, 0, 0)],
            },
        ],
    };
    let json = serde_json::to_string_pretty(&scene).unwrap();
    assert!(json.contains("\"shape\": \"filled_circle\""));
    let parsed = Scene::from_json(&json).unwrap();
    assert_eq!(parsed, scene);

    let canvas = parsed.render().unwrap();
    assert_eq!(canvas.pixel_at(5, 5), Some(Color::BLACK));
    assert_eq!(canvas.pixel_at(1, 5), Some(Color::rgb(255, 0, 0)));
    assert_eq!(canvas.pixel_at(0, 0), Some(Color::WHITE));
}

#[test]
fn scene_file_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("drawer-{}-scene.json", std::process::id()));
    std::fs::write(
        &path,
        r##"{ "bounds": { "min": { "x": 0, "y": 0 }, "max": { "x": 3, "y": 3 } },
             "commands": [ { "shape": "fill", "colors": ["#112233"] } ] }"##,
    )
    .unwrap();
    let scene = Scene::load(&path);
    std::fs::remove_file(&path).ok();

    let canvas = scene.unwrap().render().unwrap();
    assert!(canvas.pixels().iter().all(|p| *p == Color::rgb(0x11, 0x22, 0x33)));
}

#[test]
fn missing_scene_file_is_a_config_error() {
    let err = Scene::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}
