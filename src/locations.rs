use std::fmt::Write;

use anyhow::Result;
use wayfind_core::prelude::*;

/// Table of location markers, or their GeoJSON
pub fn render_locations(model: &CampusModel, geojson: bool) -> Result<String> {
    if geojson {
        return Ok(serde_json::to_string(&model.names().to_geojson(model.graph())?)?);
    }

    let mut output = String::new();
    for marker in model.locations()? {
        writeln!(
            output,
            "{}\t{:.6}\t{:.6}\t{}",
            marker.name,
            marker.lat(),
            marker.lng(),
            marker.members
        )?;
    }
    Ok(output.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_one_row_per_name() {
        let model = campus_model_from_str(
            r#"{"nodes": [
                {"id": 1, "name": "Hall", "lat": 10, "lng": 20},
                {"id": 2, "name": "Hall", "lat": 20, "lng": 30},
                {"id": 3, "name": " ", "lat": 0, "lng": 0}
            ]}"#,
            false,
        )
        .unwrap();

        assert_eq!(
            render_locations(&model, false).unwrap(),
            "Hall\t15.000000\t25.000000\t2"
        );
        let geojson: serde_json::Value =
            serde_json::from_str(&render_locations(&model, true).unwrap()).unwrap();
        assert_eq!(geojson["features"].as_array().map(Vec::len), Some(1));
    }
}
