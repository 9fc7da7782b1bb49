use crate::FinderParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct FinderToolConfig {
    /// Detection table (`.csv` or `.json`).
    pub input: PathBuf,
    #[serde(default)]
    pub params: FinderParams,
    #[serde(default)]
    pub crop: Option<CropConfig>,
    pub output: FinderOutputConfig,
}

/// Lot boundary used to compute a detector crop region.
#[derive(Debug, Deserialize)]
pub struct CropConfig {
    pub vertices: Vec<[i32; 2]>,
    #[serde(default = "default_padding")]
    pub padding: u32,
    /// Still from the video, read only for its dimensions.
    pub frame: PathBuf,
}

fn default_padding() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
pub struct FinderOutputConfig {
    /// Space table (`.csv` or `.json`).
    pub spaces: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    #[serde(default)]
    pub overlay: Option<OverlayConfig>,
}

#[derive(Debug, Deserialize)]
pub struct OverlayConfig {
    pub frame: PathBuf,
    pub image_out: PathBuf,
}

pub fn load_config(path: &Path) -> Result<FinderToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutAxis;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: FinderToolConfig = serde_json::from_str(
            r#"{"input": "dets.csv", "output": {"spaces": "out/spaces.csv"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.params, FinderParams::default());
        assert!(cfg.crop.is_none());
        assert!(cfg.output.overlay.is_none());
    }

    #[test]
    fn full_config_parses() {
        let cfg: FinderToolConfig = serde_json::from_str(
            r#"{
                "input": "dets.json",
                "params": {"discover": {"eps": 12.0}, "layout": {"axis": "horizontal"}},
                "crop": {"vertices": [[10, 10], [200, 80]], "frame": "frame.png"},
                "output": {
                    "spaces": "spaces.json",
                    "report_json": "report.json",
                    "overlay": {"frame": "frame.png", "image_out": "overlay.png"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.params.discover.eps, 12.0);
        assert_eq!(cfg.params.layout.axis, Some(LayoutAxis::Horizontal));
        let crop = cfg.crop.unwrap();
        assert_eq!(crop.padding, 50);
        assert_eq!(crop.vertices.len(), 2);
    }
}
