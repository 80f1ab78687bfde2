use grit_engine::materials::MAT_SAND;
use grit_engine::settings::SimSettings;
use grit_engine::WorldCore;

#[test]
fn default_settings_produce_a_250_by_175_grid() {
    let world = WorldCore::new(SimSettings::default());
    assert_eq!(world.cols(), 250);
    assert_eq!(world.rows(), 175);
}

#[test]
fn a_world_built_from_json_settings_runs() {
    let json = r#"{"width":320,"height":240,"cellSize":4,"spawnMatrixSize":3,"spawnProbability":100}"#;
    let settings = SimSettings::from_json(json).unwrap();
    let mut world = WorldCore::new(settings);
    assert_eq!(world.cols(), 80);
    assert_eq!(world.rows(), 60);

    world.set_material(MAT_SAND);
    world.paint(40, 30);
    assert_eq!(world.particle_count(), 9);

    world.step();
    assert_eq!(world.particle_count(), 9);
}

#[test]
fn malformed_settings_are_rejected() {
    assert!(SimSettings::from_json("not json").is_err());
    assert!(SimSettings::from_json(r#"{"cellSize":0}"#).is_err());
}
