use crate::error::DrtResult;
use crate::types::{DrtConfig, OrbitalVector};
use std::fs;
use std::path::Path;
use tracing::info;

/// Build the `set key value` script, one entry per line
pub fn render_lines(config: &DrtConfig) -> Vec<String> {
    let mut lines = vec![
        "#======================".to_string(),
        "# INPUT VALUES".to_string(),
        "#======================".to_string(),
        format!("set num_unique_atoms {}", config.num_unique_atoms),
        format!("set group_symmetry \"{}\"", config.point_group),
        format!("set spatial_symmetry {}", config.spatial_symmetry),
        String::new(),
        "# FROM DRT TABLE".to_string(),
        "#===========================".to_string(),
        format!("set spin_state \"{}\"", config.spin_state),
        format!("set num_electrons {}", config.num_electrons),
    ];

    for vector in OrbitalVector::ALL {
        lines.push(format!(
            "set {} \"{}\"",
            vector.name(),
            config.orbital(vector)
        ));
    }

    lines
}

/// Full document text; lines are newline-separated with no trailing newline
pub fn render(config: &DrtConfig) -> String {
    render_lines(config).join("\n")
}

/// Write the rendered script, replacing whatever was at `path`
pub fn write_output(path: &Path, config: &DrtConfig) -> DrtResult<()> {
    let content = render(config);
    fs::write(path, &content)?;
    info!(path = %path.display(), bytes = content.len(), "wrote DRT input values");
    Ok(())
}
