use param_checker::BufferConsole;
use param_checker::ChangeReport;
use param_checker::CheckerConfig;
use param_checker::ParamChecker;
use param_checker::SimulatedHost;

pub type TestChecker = ParamChecker<SimulatedHost, BufferConsole>;

pub const RACK: &str = r#"
[[targets]]
index = 0
name = "FLEX"
params = [{ name = "Cutoff", value = 0.5 }]

[[targets]]
index = 2
name = "3x Osc"
params = [
    { name = "Osc 1 level", value = 0.1 },
    { name = "Osc 2 level", value = 0.5 },
    { name = "Osc 3 level", value = 0.9 },
]

[[targets]]
index = 1
slot = 3
name = "Fruity Reeverb 2"
display_name = "Hall"
params = [{ name = "Decay", value = 0.4 }, { name = "Mix", value = 1.0 }]
"#;

/// Writes the shared rack to a temp dir and loads it into a checker.
pub fn checker_from_rack(config: CheckerConfig) -> (TestChecker, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rack.toml");
    std::fs::write(&path, RACK).expect("write rack");
    let host = SimulatedHost::from_rack_file(path.to_str().unwrap()).expect("load rack");
    (ParamChecker::new(host, BufferConsole::new(), config), dir)
}

pub fn tick(
    checker: &mut TestChecker,
    count: usize,
) -> Vec<ChangeReport> {
    (0..count).filter_map(|_| checker.on_tick()).collect()
}
