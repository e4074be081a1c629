//! Class index to label translation.

pub const SPACECRAFT_LABELS: [&str; 22] = [
    "fire extinguisher",
    "toolbox",
    "oxygen tank",
    "control panel",
    "wire harness",
    "antenna",
    "solar panel",
    "thruster",
    "heat shield",
    "docking port",
    "communication array",
    "fuel tank",
    "navigation system",
    "life support unit",
    "power distribution",
    "thermal radiator",
    "sensor array",
    "cargo bay",
    "airlock",
    "robotic arm",
    "landing gear",
    "propulsion system",
];

/// Class ids emitted by models trained on a larger label space, folded back
/// onto the three primary components.
pub const OVERFLOW_LABELS: [(i64, &str); 4] = [
    (1274, "fire extinguisher"),
    (6364, "toolbox"),
    (8163, "oxygen tank"),
    (8008, "fire extinguisher"),
];

/// Maps any class id to a non-empty label.
pub fn label_for(class_id: i64) -> String {
    let primary = usize::try_from(class_id).ok()
        .and_then(|index| SPACECRAFT_LABELS.get(index));
    if let Some(label) = primary {
        return label.to_string();
    }
    OVERFLOW_LABELS.iter()
        .find(|(id, _)| *id == class_id)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("class_{class_id}"))
}
