use serde_json::to_string_pretty;
use waypose_trajectory_core::{build_trajectory, export_trajectory_json, parse_stored_path_json};

fn main() -> anyhow::Result<()> {
    // Two-waypoint diagonal; orientations default to identity.
    let json = r#"{
        "name": "demo-line",
        "waypoints": [
            { "position": { "x": -1.0, "y": -1.0, "z": 1.0 } },
            { "position": { "x": 3.0, "y": 3.0, "z": 3.0 } }
        ]
    }"#;
    let path = parse_stored_path_json(json)?;
    let traj = build_trajectory(&path.waypoints, 10)?;

    println!("{} poses along '{}'", traj.len(), path.name);
    for pose in &traj {
        println!(
            "p = ({:+.3}, {:+.3}, {:+.3})  speed = {:.3}",
            pose.position.x, pose.position.y, pose.position.z, pose.speed
        );
    }

    println!(
        "export:\n{}",
        to_string_pretty(&export_trajectory_json(&traj))?
    );
    Ok(())
}
