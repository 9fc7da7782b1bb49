use parking_spaces::config::finder;
use parking_spaces::crop::{crop_for_source, ImageFrame};
use parking_spaces::io::{load_detections, write_json_file, write_spaces};
use parking_spaces::overlay::save_overlay;
use parking_spaces::stages::PipelineStage;
use parking_spaces::{SpaceFinder, SpaceReport};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = finder::load_config(Path::new(&config_path))?;

    let detections = load_detections(&config.input).map_err(|e| e.to_string())?;
    let finder = SpaceFinder::new(config.params.clone()).map_err(|e| e.to_string())?;
    let report = finder.process(&detections).map_err(|e| e.to_string())?;

    print_text_summary(&report);

    write_spaces(&config.output.spaces, &report.spaces).map_err(|e| e.to_string())?;
    println!(
        "Saved {} spaces to {}",
        report.spaces.len(),
        config.output.spaces.display()
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report).map_err(|e| e.to_string())?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(crop) = &config.crop {
        let frame = ImageFrame::new(&crop.frame);
        match crop_for_source(&crop.vertices, crop.padding, &frame).map_err(|e| e.to_string())? {
            Some(region) => println!("Crop region (xyxy): {:?}", region.to_xyxy()),
            None => println!("Crop region: none (no vertices)"),
        }
    }

    if let Some(overlay) = &config.output.overlay {
        save_overlay(&overlay.frame, &report.spaces, &overlay.image_out)
            .map_err(|e| e.to_string())?;
        println!("Overlay written to {}", overlay.image_out.display());
    }

    Ok(())
}

fn print_text_summary(report: &SpaceReport) {
    let clustering = &report.trace.clustering;
    println!("Discovery summary");
    println!(
        "  detections: {} over {} timestamps",
        report.trace.input.detections, report.trace.input.distinct_timestamps
    );
    println!(
        "  clusters: {} ({} accepted, {} rejected, {} noise points)",
        clustering.clusters.len(),
        clustering.accepted(),
        clustering.rejected(),
        clustering.noise_points
    );
    println!("  required frames: {:.2}", clustering.required_frames);
    println!(
        "  layout: {}{}",
        report.axis.label(),
        if report.trace.ordering.forced {
            " (forced)"
        } else {
            ""
        }
    );
    let timings = &report.trace.timings;
    println!("  total_ms: {:.3}", timings.total_ms);
    for stage in [PipelineStage::Discover, PipelineStage::Order] {
        if let Some(ms) = timings.stage_ms(stage) {
            println!("    {}_ms: {:.3}", stage.name(), ms);
        }
    }
    for s in &report.spaces {
        println!(
            "  space {:>3}: cx={:.1} cy={:.1} r={:.1}",
            s.space.unwrap_or_default(),
            s.cx,
            s.cy,
            s.radius
        );
    }
}

fn usage() -> String {
    "Usage: find_spaces <config.json>".to_string()
}
