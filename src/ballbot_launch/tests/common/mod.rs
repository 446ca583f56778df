use std::fs;
use std::path::Path;

use ballbot_launch::AmentIndex;

/// Install a fake `ocs2_ballbot_ros` package under `prefix`.
pub fn install_ballbot_package(prefix: &Path) -> AmentIndex {
    let index = prefix.join("share/ament_index/resource_index/packages");
    fs::create_dir_all(&index).unwrap();
    fs::write(index.join("ocs2_ballbot_ros"), "").unwrap();

    let share = prefix.join("share/ocs2_ballbot_ros/launch");
    fs::create_dir_all(&share).unwrap();
    fs::write(share.join("visualize.launch.py"), "").unwrap();

    let lib = prefix.join("lib/ocs2_ballbot_ros");
    fs::create_dir_all(&lib).unwrap();
    for exe in ["ballbot_ddp", "ballbot_dummy_test", "ballbot_target"] {
        fs::write(lib.join(exe), "").unwrap();
    }

    AmentIndex::from_path(prefix.to_str().unwrap())
}
